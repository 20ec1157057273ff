use crate::config::StatsConfig;
use crate::error::FetchError;
use crate::models::{
    DifficultyCount, GraphQlRequest, GraphQlResponse, ProfileData, StatsSnapshot,
    UsernameVariables,
};
use crate::transport::Transport;

pub const LEETCODE_PROFILE_QUERY: &str = r#"
query getUserProfile($username: String!) {
  matchedUser(username: $username) {
    username
    profile {
      ranking
    }
    submitStats: submitStatsGlobal {
      acSubmissionNum {
        difficulty
        count
        submissions
      }
    }
  }
  allQuestionsCount {
    difficulty
    count
  }
}
"#;

pub const ALL: &str = "All";
pub const EASY: &str = "Easy";
pub const MEDIUM: &str = "Medium";
pub const HARD: &str = "Hard";

/// Where the stats widget is in its one-shot lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum StatsPhase {
    #[default]
    Loading,
    Ready(StatsSnapshot),
    Failed(String),
}

impl StatsPhase {
    pub fn from_result(result: Result<StatsSnapshot, FetchError>) -> Self {
        match result {
            Ok(snapshot) => StatsPhase::Ready(snapshot),
            Err(e) => StatsPhase::Failed(e.to_string()),
        }
    }
}

pub fn stats_query(username: &str) -> GraphQlRequest<'static, UsernameVariables<'_>> {
    GraphQlRequest {
        query: LEETCODE_PROFILE_QUERY,
        variables: UsernameVariables { username },
    }
}

/// Completion rate in percent; 0 when there are no questions.
pub fn acceptance_rate(solved: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        solved as f64 / total as f64 * 100.0
    }
}

/// "Top N%" estimate for a global `ranking` against an assumed `population`.
/// Never below 1, and never increasing as the ranking gets worse.
pub fn percentile(ranking: u64, population: u64) -> u32 {
    if population == 0 {
        return 1;
    }
    let estimate = ((1.0 - ranking as f64 / population as f64) * 100.0).round();
    estimate.max(1.0) as u32
}

/// Width of a per-difficulty progress bar, in percent of the bar.
pub fn difficulty_progress(solved: u64, total: u64) -> f64 {
    acceptance_rate(solved, total).min(100.0)
}

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn count_for(entries: &[DifficultyCount], difficulty: &str) -> u64 {
    entries
        .iter()
        .find(|e| e.difficulty == difficulty)
        .and_then(|e| e.count)
        .unwrap_or(0)
}

/// Shapes a GraphQL profile response into a [`StatsSnapshot`].
pub fn parse_stats_response(body: &str) -> Result<StatsSnapshot, FetchError> {
    let response: GraphQlResponse<ProfileData> = serde_json::from_str(body)?;

    if let Some(first) = response.errors.as_ref().and_then(|errors| errors.first()) {
        return Err(FetchError::UpstreamReported(first.message.clone()));
    }

    let data = response
        .data
        .ok_or_else(|| FetchError::Malformed("response has no data".to_string()))?;
    let user = data.matched_user.ok_or(FetchError::NotFound)?;

    let solved = &user.submit_stats.ac_submission_num;
    let questions = &data.all_questions_count;
    let total_solved = count_for(solved, ALL);
    let total_questions = count_for(questions, ALL);

    Ok(StatsSnapshot {
        username: user.username,
        ranking: user.profile.ranking,
        total_solved,
        easy_solved: count_for(solved, EASY),
        medium_solved: count_for(solved, MEDIUM),
        hard_solved: count_for(solved, HARD),
        total_questions,
        easy_questions: count_for(questions, EASY),
        medium_questions: count_for(questions, MEDIUM),
        hard_questions: count_for(questions, HARD),
        acceptance_rate: acceptance_rate(total_solved, total_questions),
    })
}

/// Issues the profile query through the configured forwarding URL.
pub async fn fetch_stats<T: Transport>(
    transport: &T,
    config: &StatsConfig,
) -> Result<StatsSnapshot, FetchError> {
    let url = config.request_url();
    log::debug!("Fetching LeetCode stats for {} via {url}", config.username);
    let query = serde_json::to_value(stats_query(&config.username))?;
    let body = transport
        .post_json(&url, &query)
        .await?
        .into_success_body()?;
    parse_stats_response(&body)
}

/// Resolves the widget's phase. Errors are logged here and never escape.
pub async fn load<T: Transport>(transport: &T, config: &StatsConfig) -> StatsPhase {
    let result = fetch_stats(transport, config).await;
    if let Err(e) = &result {
        log::error!("LeetCode API error ({:?}): {e}", e.kind());
    }
    StatsPhase::from_result(result)
}
