use chrono::{DateTime, Datelike, Duration, Local};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use regex::{Captures, Regex};
use std::sync::LazyLock;
use std::time::Duration as StdDuration;

const DEFAULT_FPS: f64 = 30.0;

// About a century. Keeps deadline arithmetic inside chrono's calendar range
// even when a parse saturates at u64::MAX milliseconds.
const MAX_COUNTDOWN_MS: u64 = 36_525 * 24 * 60 * 60 * 1_000;

// Up to four optional segments in fixed order, each at most once, anchored
// over the whole string: "98h40m37s973ms", "7h3m", "350ms", "".
static HMS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([0-9]+)h)?(?:([0-9]+)m)?(?:([0-9]+)s)?(?:([0-9]+)ms)?$").unwrap()
});

pub fn parse_duration(time: &str) -> u64 {
    // 1. Digits only -> whole seconds
    if !time.is_empty() && time.bytes().all(|b| b.is_ascii_digit()) {
        return whole_number(time).saturating_mul(1_000);
    }

    // 2. hms string; anything unrecognized is a zero-length countdown
    match HMS.captures(time) {
        Some(parts) => segment(&parts, 1, 3_600_000)
            .saturating_add(segment(&parts, 2, 60_000))
            .saturating_add(segment(&parts, 3, 1_000))
            .saturating_add(segment(&parts, 4, 1)),
        None => 0,
    }
}

fn segment(parts: &Captures<'_>, group: usize, ms_per_unit: u64) -> u64 {
    parts.get(group).map_or(0, |digits| {
        whole_number(digits.as_str()).saturating_mul(ms_per_unit)
    })
}

// Input is all ASCII digits by construction. Saturates instead of overflowing.
fn whole_number(digits: &str) -> u64 {
    digits.bytes().fold(0u64, |n, b| {
        n.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    })
}

pub fn format_remaining(remaining_ms: u64) -> String {
    let total_secs = remaining_ms / 1_000;
    let total_mins = total_secs / 60;
    format!(
        "{}:{:02}:{:02}.{:03}",
        total_mins / 60,
        total_mins % 60,
        total_secs % 60,
        remaining_ms % 1_000
    )
}

pub fn format_wakeup(end: &DateTime<Local>, now: &DateTime<Local>) -> String {
    let end_date = end.date_naive();
    let now_date = now.date_naive();

    if end_date == now_date {
        end.format("%H:%M:%S").to_string()
    } else if end_date.year() == now_date.year() {
        end.format("%m-%d %H:%M:%S").to_string()
    } else {
        end.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

pub fn deadline_after(now: DateTime<Local>, duration_ms: u64) -> DateTime<Local> {
    now + Duration::milliseconds(duration_ms.min(MAX_COUNTDOWN_MS) as i64)
}

pub fn refresh_rate(primary: Option<&str>, fallback: Option<&str>) -> f64 {
    primary
        .or(fallback)
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|fps| fps.is_finite() && *fps > 0.0)
        .unwrap_or(DEFAULT_FPS)
}

pub fn refresh_rate_from_env() -> f64 {
    let primary = std::env::var("PRETTY_SLEEPY_FPS").ok();
    let fallback = std::env::var("FPS").ok();
    refresh_rate(primary.as_deref(), fallback.as_deref())
}

pub fn tick_interval(fps: f64) -> StdDuration {
    // tokio rejects a zero-length interval
    StdDuration::try_from_secs_f64(1.0 / fps)
        .unwrap_or_else(|_| StdDuration::from_secs_f64(1.0 / DEFAULT_FPS))
        .max(StdDuration::from_nanos(1))
}

// indicatif takes its redraw ceiling as whole Hz
fn draw_hz(fps: f64) -> u8 {
    fps.clamp(1.0, 255.0).ceil() as u8
}

pub async fn run_countdown(deadline: DateTime<Local>, fps: f64) {
    println!("Sleeping until {}", format_wakeup(&deadline, &Local::now()));

    let line =
        ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout_with_hz(draw_hz(fps)));
    line.set_style(ProgressStyle::with_template("{msg}").unwrap());

    let mut ticks = tokio::time::interval(tick_interval(fps));
    loop {
        ticks.tick().await;
        let remaining = (deadline - Local::now()).num_milliseconds();
        if remaining <= 0 {
            break;
        }
        line.set_message(format!("{} left...", format_remaining(remaining as u64)));
    }
    line.finish_and_clear();
}
