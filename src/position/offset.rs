//! Offset resolvers
//!
//! A resolver turns a reference element into the point placements are
//! measured from. Two coordinate modes are built in:
//!
//! - [`relative_offset`]: relative to the nearest non-static ancestor
//! - [`absolute_offset`]: relative to the document, correcting for margins
//!   of static ancestors

use crate::config::MarginCorrection;
use crate::host::LayoutElement;
use crate::models::Offset;

/// Computes the reference point for an element
pub trait OffsetResolver<E: LayoutElement> {
    fn resolve(&self, element: &E) -> Offset;
}

impl<E, F> OffsetResolver<E> for F
where
    E: LayoutElement,
    F: Fn(&E) -> Offset,
{
    fn resolve(&self, element: &E) -> Offset {
        self(element)
    }
}

/// Resolver for [`relative_offset`]
#[derive(Clone, Copy, Debug, Default)]
pub struct RelativeOffset;

impl<E: LayoutElement> OffsetResolver<E> for RelativeOffset {
    fn resolve(&self, element: &E) -> Offset {
        relative_offset(element)
    }
}

/// Resolver for [`absolute_offset`]
#[derive(Clone, Copy, Debug, Default)]
pub struct AbsoluteOffset {
    pub margin_correction: MarginCorrection,
}

impl<E: LayoutElement> OffsetResolver<E> for AbsoluteOffset {
    fn resolve(&self, element: &E) -> Offset {
        absolute_offset(element, self.margin_correction)
    }
}

/// Offset of `target` relative to its nearest non-statically positioned
/// ancestor (or the document origin when there is none)
///
/// Starts from the element's own `offsetTop/offsetLeft` and adds the offsets
/// of each static offset parent, stopping at the first non-static one.
pub fn relative_offset<E: LayoutElement>(target: &E) -> Offset {
    let mut offset = Offset::new(target.offset_top(), target.offset_left());

    let mut parent = target.offset_parent();
    while let Some(node) = parent {
        if !node.computed_box().position.is_static() {
            break;
        }
        offset += Offset::new(node.offset_top(), node.offset_left());
        parent = node.offset_parent();
    }

    offset
}

/// Offset of `target` relative to the document
///
/// The bounding box is taken relative to the body's bounding box, then the
/// margins of static offset-parent ancestors (usually just the body) are
/// added back.
pub fn absolute_offset<E: LayoutElement>(target: &E, correction: MarginCorrection) -> Offset {
    let margins = static_margins(target, correction);
    let rect = target.bounding_rect();
    let body = target.body_rect();

    Offset::new(rect.top - body.top, rect.left - body.left) + margins
}

/// Sum of the margins of static offset-parent ancestors
fn static_margins<E: LayoutElement>(target: &E, correction: MarginCorrection) -> Offset {
    let mut margins = Offset::ZERO;

    let mut parent = target.offset_parent();
    while let Some(node) = parent {
        let computed = node.computed_box();
        let declared = match correction {
            MarginCorrection::Paired => {
                !computed.margin_top.is_empty() && !computed.margin_left.is_empty()
            }
            MarginCorrection::Independent => true,
        };

        if computed.position.is_static() && declared {
            if let Some(top) = computed.margin_top_px().filter(|v| *v != 0) {
                margins.top += top as f64;
            }
            if let Some(left) = computed.margin_left_px().filter(|v| *v != 0) {
                margins.left += left as f64;
            }
        }

        parent = node.offset_parent();
    }

    margins
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MeasuredElement, PositionMode};
    use crate::models::ClientRect;

    fn body() -> MeasuredElement {
        MeasuredElement::builder()
            .offset(0.0, 0.0)
            .margins("8px", "8px")
            .rect(ClientRect::new(8.0, 8.0, 784.0, 600.0))
            .body(ClientRect::new(8.0, 8.0, 784.0, 600.0))
            .build()
    }

    #[test]
    fn test_relative_offset_sums_static_parents() {
        let body = body();
        let section = MeasuredElement::builder()
            .offset(30.0, 10.0)
            .offset_parent(&body)
            .build();
        let item = MeasuredElement::builder()
            .offset(5.0, 2.0)
            .offset_parent(&section)
            .build();

        // item + section + body (all static)
        assert_eq!(relative_offset(&item), Offset::new(35.0, 12.0));
    }

    #[test]
    fn test_relative_offset_stops_at_positioned_parent() {
        let body = body();
        let card = MeasuredElement::builder()
            .offset(100.0, 100.0)
            .position(PositionMode::Relative)
            .offset_parent(&body)
            .build();
        let inner = MeasuredElement::builder()
            .offset(20.0, 0.0)
            .offset_parent(&card)
            .build();
        let item = MeasuredElement::builder()
            .offset(4.0, 6.0)
            .offset_parent(&inner)
            .build();

        // item + inner; card is positioned so the walk stops there
        assert_eq!(relative_offset(&item), Offset::new(24.0, 6.0));
    }

    #[test]
    fn test_relative_offset_without_parent() {
        let orphan = MeasuredElement::builder().offset(3.0, 4.0).build();
        assert_eq!(relative_offset(&orphan), Offset::new(3.0, 4.0));
    }

    #[test]
    fn test_absolute_offset_adds_body_margin() {
        let body = body();
        let reference = MeasuredElement::builder()
            .size(100.0, 100.0)
            .offset_parent(&body)
            .rect(ClientRect::new(58.0, 28.0, 100.0, 100.0))
            .build();

        let offset = absolute_offset(&reference, MarginCorrection::Paired);
        assert_eq!(offset, Offset::new(58.0, 28.0));
    }

    #[test]
    fn test_absolute_offset_ignores_positioned_ancestor_margins() {
        let body = body();
        let card = MeasuredElement::builder()
            .position(PositionMode::Relative)
            .margins("20px", "20px")
            .offset_parent(&body)
            .build();
        let item = MeasuredElement::builder()
            .offset_parent(&card)
            .rect(ClientRect::new(40.0, 40.0, 10.0, 10.0))
            .build();

        // Only the body's 8px margins count
        let offset = absolute_offset(&item, MarginCorrection::Paired);
        assert_eq!(offset, Offset::new(40.0, 40.0));
    }

    #[test]
    fn test_absolute_offset_single_margin_needs_independent_correction() {
        let wrapper = MeasuredElement::builder()
            .margins("12px", "")
            .body(ClientRect::new(0.0, 0.0, 800.0, 600.0))
            .build();
        let item = MeasuredElement::builder()
            .offset_parent(&wrapper)
            .rect(ClientRect::new(50.0, 50.0, 10.0, 10.0))
            .build();

        // Paired: a wrapper declaring only a top margin contributes nothing
        assert_eq!(
            absolute_offset(&item, MarginCorrection::Paired),
            Offset::new(50.0, 50.0)
        );
        assert_eq!(
            absolute_offset(&item, MarginCorrection::Independent),
            Offset::new(62.0, 50.0)
        );
    }

    #[test]
    fn test_absolute_offset_skips_zero_and_non_numeric_margins() {
        let wrapper = MeasuredElement::builder()
            .margins("0px", "auto")
            .body(ClientRect::new(0.0, 0.0, 800.0, 600.0))
            .build();
        let item = MeasuredElement::builder()
            .offset_parent(&wrapper)
            .rect(ClientRect::new(50.0, 50.0, 10.0, 10.0))
            .build();

        assert_eq!(
            absolute_offset(&item, MarginCorrection::Paired),
            Offset::new(50.0, 50.0)
        );
    }

    #[test]
    fn test_closure_resolver() {
        let item = MeasuredElement::builder().offset(1.0, 2.0).build();
        let fixed = |_: &MeasuredElement| Offset::new(42.0, 24.0);

        assert_eq!(fixed.resolve(&item), Offset::new(42.0, 24.0));
        assert_eq!(RelativeOffset.resolve(&item), Offset::new(1.0, 2.0));
    }
}
