use yew::prelude::*;

use crate::i18n::use_i18n;

/// Index of the shown image. Stepping wraps around both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LightboxState {
    len: usize,
    index: usize,
}

impl LightboxState {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub images: &'static [&'static str],
    pub on_close: Callback<()>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let i18n = use_i18n();
    let state = use_state(|| LightboxState::new(props.images.len()));

    let Some(current) = props.images.get(state.index()) else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let next = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            state.set(state.next());
        })
    };
    let prev = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            state.set(state.prev());
        })
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let several = props.images.len() > 1;

    html! {
        <div class="lightbox" onclick={close.clone()}>
            <button class="lightbox-close" onclick={close} aria-label={i18n.t("ui.close").to_string()}>{"✕"}</button>
            {
                if several {
                    html! { <button class="lightbox-nav prev" onclick={prev} aria-label={i18n.t("ui.prev").to_string()}>{"‹"}</button> }
                } else {
                    html! {}
                }
            }
            <img class="lightbox-image" src={*current} alt="" onclick={keep_open} />
            {
                if several {
                    html! { <button class="lightbox-nav next" onclick={next} aria-label={i18n.t("ui.next").to_string()}>{"›"}</button> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

pub const STYLE: &str = r#"
.lightbox {
    position: fixed;
    inset: 0;
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.85);
}
.lightbox-image {
    max-width: 90vw;
    max-height: 85vh;
    border-radius: 0.5rem;
    object-fit: contain;
}
.lightbox-close,
.lightbox-nav {
    position: absolute;
    background: none;
    border: none;
    color: #fff;
    cursor: pointer;
}
.lightbox-close {
    top: 1rem;
    right: 1.5rem;
    font-size: 2rem;
}
.lightbox-nav {
    top: 50%;
    transform: translateY(-50%);
    font-size: 3rem;
    padding: 0 1rem;
}
.lightbox-nav.prev { left: 1rem; }
.lightbox-nav.next { right: 1rem; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_wraps_around() {
        let state = LightboxState::new(3);
        assert_eq!(state.index(), 0);
        assert_eq!(state.next().index(), 1);
        assert_eq!(state.next().next().next().index(), 0);
        assert_eq!(state.prev().index(), 2);
    }

    #[test]
    fn single_image_stays_put() {
        let state = LightboxState::new(1);
        assert_eq!(state.next().index(), 0);
        assert_eq!(state.prev().index(), 0);
    }

    #[test]
    fn empty_gallery_does_not_move() {
        let state = LightboxState::new(0);
        assert_eq!(state.next(), state);
        assert_eq!(state.prev(), state);
    }
}
