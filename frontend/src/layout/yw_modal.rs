#[cfg(test)]
#[path = "yw_modal_test.rs"]
mod yw_modal_test;

use web_sys::{Element, EventTarget};
use yew::prelude::*;

/// Overlay used for booking results and error messages.
///
/// Hidden/visible is driven entirely by the `visible` prop. Clicking the
/// close control, or the backdrop itself (not anything inside the content
/// box), emits `on_close`.
pub struct YwModal {
    overlay_ref: NodeRef,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub visible: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

impl Component for YwModal {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            overlay_ref: NodeRef::default(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let display = if props.visible {
            "display: block;"
        } else {
            "display: none;"
        };

        // Yew delegates listeners, so `current_target` is not the overlay;
        // compare the click target against the overlay node instead.
        let on_backdrop = {
            let on_close = props.on_close.clone();
            let overlay_ref = self.overlay_ref.clone();
            Callback::from(move |e: MouseEvent| {
                let overlay = overlay_ref.cast::<Element>().map(EventTarget::from);
                if is_backdrop_click(e.target().as_ref(), overlay.as_ref()) {
                    on_close.emit(());
                }
            })
        };
        let on_close_click = props.on_close.reform(|_: MouseEvent| ());

        html! {
            <div
                id="modal"
                class="modal"
                style={display}
                ref={self.overlay_ref.clone()}
                onclick={on_backdrop}
            >
                <div class="modal-content">
                    <span class="close" onclick={on_close_click}>{ "×" }</span>
                    <div id="modalBody">
                        { props.children.clone() }
                    </div>
                </div>
            </div>
        }
    }
}

/// A click dismisses the modal only when its target is the overlay itself.
/// Clicks inside the content box bubble up with a child as target.
pub fn is_backdrop_click<T: PartialEq>(target: Option<&T>, overlay: Option<&T>) -> bool {
    matches!((target, overlay), (Some(target), Some(overlay)) if target == overlay)
}
