use yew::prelude::*;

use crate::components::theme::use_theme;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or(40)]
    pub size: u32,
}

#[function_component(HiveSurfLogo)]
pub fn hive_surf_logo(props: &LogoProps) -> Html {
    let theme = use_theme();
    let colors = theme.state.colors;
    let size = props.size.to_string();

    html! {
        <svg class="hivesurf-logo" width={size.clone()} height={size} viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg">
            <defs>
                <linearGradient id="hive-gradient" x1="0%" y1="0%" x2="100%" y2="100%">
                    <stop offset="0%" stop-color={colors.primary} />
                    <stop offset="100%" stop-color={colors.secondary} />
                </linearGradient>
            </defs>
            <polygon points="50,5 90,27.5 90,72.5 50,95 10,72.5 10,27.5" fill="none" stroke="url(#hive-gradient)" stroke-width="6" />
            <path d="M22 58 Q36 40 50 58 T78 58" fill="none" stroke={colors.accent} stroke-width="6" stroke-linecap="round" />
            <circle cx="50" cy="36" r="6" fill="url(#hive-gradient)" />
        </svg>
    }
}

/// Slow floating colour blobs behind every page.
#[function_component(AnimatedBackground)]
pub fn animated_background() -> Html {
    let theme = use_theme();
    let colors = theme.state.colors;
    let blobs = [
        (colors.primary, "10%", "15%", "18s"),
        (colors.secondary, "60%", "10%", "22s"),
        (colors.accent, "30%", "65%", "26s"),
    ];

    html! {
        <div class="animated-background">
            <style>
                {r#"
                    .animated-background {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .animated-background .blob {
                        position: absolute;
                        width: 28rem;
                        height: 28rem;
                        border-radius: 50%;
                        filter: blur(90px);
                        opacity: 0.25;
                        animation: drift linear infinite alternate;
                    }
                    @keyframes drift {
                        from { transform: translate(0, 0) scale(1); }
                        to { transform: translate(6rem, -4rem) scale(1.15); }
                    }
                "#}
            </style>
            { for blobs.iter().map(|(color, left, top, duration)| html! {
                <div
                    class="blob"
                    style={format!("background: {}; left: {}; top: {}; animation-duration: {};", color, left, top, duration)}
                />
            }) }
        </div>
    }
}

/// Wireframe globe drawn with CSS rings.
#[function_component(Globe)]
pub fn globe() -> Html {
    let theme = use_theme();
    let stroke = theme.state.colors.primary;

    html! {
        <div class="globe" style={format!("--globe-color: {};", stroke)}>
            <style>
                {r#"
                    .globe {
                        width: 16rem;
                        height: 16rem;
                        position: relative;
                        transform-style: preserve-3d;
                        animation: globe-spin 24s linear infinite;
                        margin: 0 auto;
                    }
                    .globe .ring {
                        position: absolute;
                        inset: 0;
                        border: 1px solid var(--globe-color);
                        border-radius: 50%;
                        opacity: 0.6;
                    }
                    @keyframes globe-spin {
                        from { transform: rotateY(0deg) rotateX(15deg); }
                        to { transform: rotateY(360deg) rotateX(15deg); }
                    }
                "#}
            </style>
            { for (0..6).map(|i| html! {
                <div class="ring" style={format!("transform: rotateY({}deg);", i * 30)} />
            }) }
            <div class="ring" style="transform: rotateX(90deg);" />
        </div>
    }
}

#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    html! {
        <div class="loading-screen">
            <style>
                {r#"
                    .loading-screen {
                        position: fixed;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(135deg, #0f172a, #1e293b, #0f172a);
                        z-index: 50;
                        color: #cbd5e1;
                        text-align: center;
                    }
                    .loading-screen h1 {
                        font-size: 3.5rem;
                        margin: 1rem 0;
                    }
                    .loading-bar {
                        height: 4px;
                        width: 18rem;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #0ea5e9, #d946ef);
                        transform-origin: left;
                        animation: loading-fill 2s ease-in-out forwards;
                        margin: 2rem auto 1rem;
                    }
                    @keyframes loading-fill {
                        from { transform: scaleX(0); }
                        to { transform: scaleX(1); }
                    }
                "#}
            </style>
            <HiveSurfLogo size={96} />
            <h1 class="gradient-text">{"HiveSurf"}</h1>
            <div>{"Riding the wave of innovation"}</div>
            <div class="loading-bar"></div>
            <div class="loading-hint">{"Loading amazing experiences..."}</div>
        </div>
    }
}
