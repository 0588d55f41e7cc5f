/// Renders a scoreline as `home-away`, or `TBD` until both sides have a score.
pub fn format_score(home: Option<u32>, away: Option<u32>) -> String {
    match (home, away) {
        (Some(home), Some(away)) => format!("{}-{}", home, away),
        _ => "TBD".to_string(),
    }
}
