use crate::browse::router::{ClickTarget, ElementRole};
use wasm_bindgen::JsCast;

pub(crate) const ROLE_ATTR: &str = "data-role";
pub(crate) const POSITION_ATTR: &str = "data-position";
pub(crate) const ROLE_CARD: &str = "card";
pub(crate) const ROLE_DELETE: &str = "delete";

pub(crate) fn role_of(role: Option<&str>, position: Option<&str>) -> Option<ElementRole> {
    let position = position?.trim().parse::<usize>().ok()?;
    match role? {
        ROLE_CARD => Some(ElementRole::Card(position)),
        ROLE_DELETE => Some(ElementRole::DeleteAffordance(position)),
        _ => None,
    }
}

/// Walk from the event target up to (and including) `boundary`.
pub(crate) fn click_target_from_event(
    ev: &web_sys::MouseEvent,
    boundary: &web_sys::Element,
) -> ClickTarget {
    let boundary: &web_sys::Node = boundary.as_ref();
    let mut chain = Vec::new();
    let mut node = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok());

    while let Some(el) = node {
        chain.push(role_of(
            el.get_attribute(ROLE_ATTR).as_deref(),
            el.get_attribute(POSITION_ATTR).as_deref(),
        ));
        if el.is_same_node(Some(boundary)) {
            break;
        }
        node = el.parent_element();
    }

    ClickTarget::new(chain)
}
