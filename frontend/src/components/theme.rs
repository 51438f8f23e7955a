use log::{info, warn};
use web_sys::window;
use yew::prelude::*;

use crate::storage::open_preferences;
use crate::theme::{ThemeController, ThemeMode, ThemeState, ThemeTimer};
use crate::timers::TimerSlot;

/// Shared with every component under [`ThemeProvider`].
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub state: ThemeState,
    pub toggle: Callback<()>,
}

pub enum ThemeMsg {
    Toggle,
    Timer(ThemeTimer),
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

pub struct ThemeProvider {
    controller: ThemeController,
    timer: TimerSlot,
    toggle: Callback<()>,
}

impl Component for ThemeProvider {
    type Message = ThemeMsg;
    type Properties = ThemeProviderProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            controller: ThemeController::new(open_preferences()),
            timer: TimerSlot::default(),
            toggle: ctx.link().callback(|_| ThemeMsg::Toggle),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ThemeMsg::Toggle => match self.controller.toggle() {
                Some(flip) => {
                    self.timer.schedule(ctx.link(), flip, ThemeMsg::Timer);
                    true
                }
                None => false,
            },
            ThemeMsg::Timer(timer) => {
                self.timer.fired();
                let step = self.controller.on_timer(timer);
                if let Some(mode) = step.flipped {
                    apply_body_class(mode);
                }
                if let Some(next) = step.next {
                    self.timer.schedule(ctx.link(), next, ThemeMsg::Timer);
                }
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            apply_body_class(self.controller.mode());
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.timer.cancel();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = self.controller.state();
        let context = ThemeContext {
            state,
            toggle: self.toggle.clone(),
        };

        html! {
            <ContextProvider<ThemeContext> context={context}>
                <div class={classes!("theme-transition", state.is_transitioning.then(|| "transitioning"))}>
                    { for ctx.props().children.iter() }
                </div>
            </ContextProvider<ThemeContext>>
        }
    }
}

/// Mirrors the mode onto `<body>` for styles that live outside components.
fn apply_body_class(mode: ThemeMode) {
    let body = match window().and_then(|w| w.document()).and_then(|d| d.body()) {
        Some(body) => body,
        None => return,
    };
    let classes = body.class_list();
    let stale = mode.toggled().body_class();
    if classes.remove_1(stale).is_err() || classes.add_1(mode.body_class()).is_err() {
        warn!("Could not update body theme class");
        return;
    }
    info!("Applied {} to body", mode.body_class());
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| {
        warn!("use_theme called outside ThemeProvider, using dark theme");
        ThemeContext {
            state: ThemeState::settled(ThemeMode::Dark),
            toggle: Callback::from(|_| ()),
        }
    })
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_theme();
    let is_dark = theme.state.is_dark;
    let onclick = theme.toggle.reform(|_: MouseEvent| ());

    html! {
        <button
            class={classes!("theme-toggle", if is_dark { "dark" } else { "light" })}
            onclick={onclick}
            disabled={theme.state.is_transitioning}
            aria-label={if is_dark { "Switch to light theme" } else { "Switch to dark theme" }}
        >
            <span class={classes!("theme-toggle-icon", (!is_dark).then(|| "rotated"))}>
                { if is_dark { "☀️" } else { "🌙" } }
            </span>
            <span class="theme-toggle-glow"></span>
        </button>
    }
}
