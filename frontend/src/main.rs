mod api;
mod components;
mod config;
mod content;
mod error;
mod models;
mod session;
mod state;
mod stats;
mod transport;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::chat::ChatButton;
use components::sections::{
    AboutSection, ContactSection, ExperienceSection, Footer, HeroSection, Navigation,
    SkillsSection,
};
use components::stats::LeetCodeSection;
use components::toast::Toaster;
use config::SiteConfig;
use state::Notices;

/// Root page composition.
#[component]
fn App() -> impl IntoView {
    SiteConfig::from_build_env().provide();
    Notices::provide();

    let (menu_open, set_menu_open) = signal(false);

    view! {
        <div class="page">
            <Navigation menu_open=menu_open set_menu_open=set_menu_open />
            <main>
                <HeroSection menu_open=menu_open />
                <AboutSection />
                <SkillsSection />
                <ExperienceSection />
                <LeetCodeSection />
                <ContactSection />
            </main>
            <ChatButton />
            <Toaster />
            <Footer />
        </div>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
