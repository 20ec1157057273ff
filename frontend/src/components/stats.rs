use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::models::StatsSnapshot;
use crate::state::StatsState;
use crate::stats::{StatsPhase, difficulty_progress, group_thousands, percentile};

/// LeetCode section: spinner, failure card, or the stats grid.
#[component]
pub fn LeetCodeSection() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let population = config.stats.population;
    let stats = StatsState::new();
    stats.load(config.stats);

    view! {
        <section id="leetcode" class="section alt">
            <div class="section-inner">
                <SectionHeading />
                {move || match stats.phase.get() {
                    StatsPhase::Loading => view! {
                        <div class="centered"><div class="spinner" /></div>
                    }.into_any(),
                    StatsPhase::Failed(detail) => view! {
                        <div class="card narrow centered-text">
                            <p class="subtle">"Unable to fetch LeetCode stats: " {detail}</p>
                            <p class="subtle small">
                                "This might be due to CORS restrictions or network issues."
                            </p>
                        </div>
                    }.into_any(),
                    StatsPhase::Ready(snapshot) => view! {
                        <StatsGrid snapshot=snapshot population=population />
                    }.into_any(),
                }}
            </div>
        </section>
    }
}

#[component]
fn SectionHeading() -> impl IntoView {
    view! {
        <div class="section-heading">
            <h2>"LeetCode " <span class="gradient">"Stats"</span></h2>
            <p class="subtle">"Problem-solving achievements and coding practice statistics"</p>
        </div>
    }
}

#[component]
fn StatsGrid(snapshot: StatsSnapshot, population: u64) -> impl IntoView {
    let top = percentile(snapshot.ranking, population);
    let profile_url = format!("https://leetcode.com/{}", snapshot.username);

    view! {
        <div class="stats-grid">
            <div class="card">
                <h3>"🏆 Profile"</h3>
                <div class="row">
                    <span class="strong">{snapshot.username.clone()}</span>
                    <a href=profile_url target="_blank" rel="noopener noreferrer">"↗"</a>
                </div>
                <span class="badge">{format!("Top {top}%")}</span>
            </div>

            <div class="card">
                <h3>"🎯 Total Solved"</h3>
                <div class="big">{snapshot.total_solved}</div>
                <div class="subtle">{format!("of {} problems", snapshot.total_questions)}</div>
                <div class="subtle small">
                    {format!("{:.1}% completion", snapshot.acceptance_rate)}
                </div>
            </div>

            <div class="card">
                <h3>"📈 Global Ranking"</h3>
                <div class="big">{format!("#{}", group_thousands(snapshot.ranking))}</div>
                <div class="subtle">{format!("Top {top}% worldwide")}</div>
            </div>

            <div class="card">
                <h3>"Difficulty Breakdown"</h3>
                <BreakdownRow label="Easy" tone="easy" solved=snapshot.easy_solved total=snapshot.easy_questions />
                <BreakdownRow label="Medium" tone="medium" solved=snapshot.medium_solved total=snapshot.medium_questions />
                <BreakdownRow label="Hard" tone="hard" solved=snapshot.hard_solved total=snapshot.hard_questions />
            </div>
        </div>

        <div class="card">
            <h3>"Problem Solving Progress"</h3>
            <ProgressBar label="Easy Problems" tone="easy" solved=snapshot.easy_solved total=snapshot.easy_questions />
            <ProgressBar label="Medium Problems" tone="medium" solved=snapshot.medium_solved total=snapshot.medium_questions />
            <ProgressBar label="Hard Problems" tone="hard" solved=snapshot.hard_solved total=snapshot.hard_questions />
        </div>
    }
}

#[component]
fn BreakdownRow(label: &'static str, tone: &'static str, solved: u64, total: u64) -> impl IntoView {
    let badge_class = format!("badge outline {tone}");

    view! {
        <div class="row spread">
            <span class=badge_class>{label}</span>
            <span class="small strong">{format!("{solved}/{total}")}</span>
        </div>
    }
}

#[component]
fn ProgressBar(label: &'static str, tone: &'static str, solved: u64, total: u64) -> impl IntoView {
    let width = format!("width: {:.2}%", difficulty_progress(solved, total));
    let label_class = format!("strong {tone}");
    let fill_class = format!("fill {tone}");

    view! {
        <div class="progress">
            <div class="row spread small">
                <span class=label_class>{label}</span>
                <span>{format!("{solved}/{total}")}</span>
            </div>
            <div class="track">
                <div class=fill_class style=width />
            </div>
        </div>
    }
}
