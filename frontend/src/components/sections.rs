use leptos::prelude::*;

use crate::content::{EXPERIENCE, NAV_LINKS, PROFILE, SKILLS};

/// Top navigation with a collapsible mobile menu.
#[component]
pub fn Navigation(menu_open: ReadSignal<bool>, set_menu_open: WriteSignal<bool>) -> impl IntoView {
    let links = move || {
        NAV_LINKS
            .iter()
            .map(|&(label, href)| {
                view! {
                    <a href=href on:click=move |_| set_menu_open.set(false)>{label}</a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a class="brand" href="#">{PROFILE.name}</a>
                <div class="nav-links">{links}</div>
                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|o| *o = !*o)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="nav-mobile">{links}</div>
            </Show>
        </nav>
    }
}

#[component]
pub fn HeroSection(menu_open: ReadSignal<bool>) -> impl IntoView {
    view! {
        <section id="hero" class="section hero" class:dimmed=move || menu_open.get()>
            <div class="section-inner centered-text">
                <h1>"Hi, I'm " <span class="gradient">{PROFILE.name}</span></h1>
                <p class="lead">{PROFILE.headline}</p>
                <p class="subtle">{PROFILE.tagline}</p>
                <div class="row center">
                    <a class="button" href="#contact">"Get in touch"</a>
                    <a class="button ghost" href="#experience">"See my work"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="section">
            <div class="section-inner">
                <h2>"About " <span class="gradient">"Me"</span></h2>
                {PROFILE.about.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="section alt">
            <div class="section-inner">
                <h2>"Skills"</h2>
                <div class="stats-grid">
                    {SKILLS
                        .iter()
                        .map(|group| view! {
                            <div class="card">
                                <h3>{group.title}</h3>
                                <div class="row wrap">
                                    {group.skills.iter().map(|s| view! { <span class="badge">{*s}</span> }).collect_view()}
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="section">
            <div class="section-inner">
                <h2>"Experience"</h2>
                {EXPERIENCE
                    .iter()
                    .map(|role| view! {
                        <div class="card">
                            <h3>{role.title} " · " {role.company}</h3>
                            <p class="subtle small">{role.period}</p>
                            <ul>
                                {role.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                            </ul>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let mailto = format!("mailto:{}", PROFILE.email);
    let github = PROFILE.github;
    let linkedin = PROFILE.linkedin;

    view! {
        <section id="contact" class="section alt">
            <div class="section-inner centered-text">
                <h2>"Get In " <span class="gradient">"Touch"</span></h2>
                <p class="subtle">"Open to new opportunities and interesting conversations."</p>
                <div class="row center">
                    <a class="button" href=mailto>{PROFILE.email}</a>
                    <a class="button ghost" href=github target="_blank" rel="noopener noreferrer">"GitHub"</a>
                    <a class="button ghost" href=linkedin target="_blank" rel="noopener noreferrer">"LinkedIn"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="subtle">
                {format!("© 2024 {}. Built with Rust, Leptos and axum.", PROFILE.name)}
            </p>
        </footer>
    }
}
