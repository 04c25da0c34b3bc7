// Expiry decision logic

/// Outcome of a single idle check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdleVerdict {
    /// No session marker; the monitor is inert
    NoSession,
    /// Marker present but no usable activity timestamp; treated as
    /// "no recorded activity", never as expired
    NoActivity,
    /// Idle time is within the threshold
    Active { idle_ms: i64 },
    /// Idle time exceeded the threshold; the session should be cleared
    Expired { idle_ms: i64 },
}

/// Decide whether a session has idled out.
///
/// Pure function of its inputs. `last_activity` is the raw stored
/// value; anything that does not parse as an integer counts as no
/// recorded activity. A timestamp in the future yields a negative
/// idle time and counts as active.
pub fn evaluate(
    now_ms: i64,
    marker_present: bool,
    last_activity: Option<&str>,
    timeout_ms: i64,
) -> IdleVerdict {
    if !marker_present {
        return IdleVerdict::NoSession;
    }

    let last_ms = match last_activity.and_then(|raw| raw.trim().parse::<i64>().ok()) {
        Some(ms) => ms,
        None => return IdleVerdict::NoActivity,
    };

    let idle_ms = now_ms - last_ms;

    if idle_ms > timeout_ms {
        IdleVerdict::Expired { idle_ms }
    } else {
        IdleVerdict::Active { idle_ms }
    }
}
