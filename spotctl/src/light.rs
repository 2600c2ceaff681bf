//! Light-on duration.
//!
//! A room light is on as long as at least one visitor is inside.  We get a list of times,
//! alternatively entrances and exits, and sum the time the light stayed on.
//!

use tracing::{debug, trace};

use crate::LightError;

/// What happened at a given time
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    Enter,
    Exit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Event {
    pub time: i64,
    pub kind: Kind,
}

/// Extract events from free text.  Every token that is an integer is an event, the first
/// one being an entrance then alternating with exits; anything else is ignored.
///
pub fn parse_events(input: &str) -> Vec<Event> {
    input
        .split_whitespace()
        .filter_map(|tok| tok.parse::<i64>().ok())
        .enumerate()
        .map(|(i, time)| Event {
            time,
            kind: if i % 2 == 0 { Kind::Enter } else { Kind::Exit },
        })
        .collect()
}

/// Sum the durations during which at least one visitor was inside.
///
/// Events are sorted by time (keeping the input order for equal times).  An exit while
/// nobody is inside is ignored.
///
#[tracing::instrument]
pub fn light_duration(events: &[Event]) -> Result<i64, LightError> {
    trace!("enter");

    let mut events = events.to_vec();
    events.sort_by_key(|ev| ev.time);

    let mut start = events
        .iter()
        .find(|ev| ev.kind == Kind::Enter)
        .map(|ev| ev.time)
        .ok_or(LightError::NoEntrance)?;

    let mut visitors = 0usize;
    let mut total = 0i64;
    for ev in &events {
        match ev.kind {
            Kind::Enter => {
                visitors += 1;
                if visitors == 1 {
                    start = ev.time;
                }
            }
            Kind::Exit => {
                if visitors == 0 {
                    debug!("exit at {} with nobody inside", ev.time);
                    continue;
                }
                visitors -= 1;
                if visitors == 0 {
                    total = ev
                        .time
                        .checked_sub(start)
                        .and_then(|d| total.checked_add(d))
                        .ok_or(LightError::Overflow)?;
                }
            }
        }
    }
    if visitors > 0 {
        debug!("{} visitor(s) still inside since {}", visitors, start);
    }
    Ok(total)
}

/// Human-readable result
///
#[inline]
pub fn describe(total: i64) -> String {
    format!("The light was on for {total} minute(s).")
}
