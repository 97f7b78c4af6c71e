//! Finger joint planning for a single panel edge.
//!
//! Candidate tab positions sit on a regular pitch. The candidate nearest the
//! edge midpoint is moved onto the midpoint and left empty; tabs go on every
//! other candidate from there, so each tab has a mirror partner and the
//! pattern is symmetric. A male edge and the female edge it mates with are
//! planned from the same length and settings, so their tab centres coincide.

use super::types::{
    EdgeRole, TabFeature, TabKind, GEOMETRIC_EPSILON, MAX_TABS_PER_EDGE, MIN_FEATURE_WIDTH,
    MIN_GAP_FLOOR, MIN_OVERCUT, OVERCUT_KERF_FACTOR,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Tabs planned for one edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgePlan {
    pub role: EdgeRole,
    pub edge_length: f64,
    /// Number of candidate positions (even, or 0 when no joinery fits).
    pub tab_count: usize,
    /// Spacing between candidate centres.
    pub pitch: f64,
    /// Nominal feature width before kerf compensation.
    pub feature_width: f64,
    pub males: Vec<TabFeature>,
    pub females: Vec<TabFeature>,
}

impl EdgePlan {
    /// A straight edge with no features.
    pub fn plain(role: EdgeRole, edge_length: f64) -> Self {
        Self {
            role,
            edge_length,
            tab_count: 0,
            pitch: 0.0,
            feature_width: 0.0,
            males: Vec::new(),
            females: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.males.is_empty() && self.females.is_empty()
    }

    /// Emitted features of either kind, in order along the edge.
    pub fn features(&self) -> impl Iterator<Item = &TabFeature> {
        self.males.iter().chain(self.females.iter())
    }

    /// True when the edge asked for joinery but none fit.
    pub fn degraded(&self) -> bool {
        self.role != EdgeRole::Plain && self.is_empty()
    }
}

/// Smallest gap between neighbouring candidates for a given kerf.
pub fn min_gap(kerf: f64) -> f64 {
    MIN_GAP_FLOOR.max(kerf)
}

/// Distance a tab centre must keep from either end of its edge.
pub fn end_clearance(thickness: f64, kerf: f64) -> f64 {
    thickness.max(min_gap(kerf))
}

/// Plan the tabs (male) or slots (female) along one edge.
///
/// Never fails: an edge too short for joinery, or a kerf that leaves no room
/// for a tooth, yields an empty plan and the edge is cut straight.
pub fn plan_edge(
    edge_length: f64,
    role: EdgeRole,
    tab_width: f64,
    thickness: f64,
    kerf: f64,
) -> EdgePlan {
    let kind = match role {
        EdgeRole::Plain => return EdgePlan::plain(role, edge_length),
        EdgeRole::Male => TabKind::Male,
        EdgeRole::Female => TabKind::Female,
    };
    if !(edge_length.is_finite() && edge_length > 0.0 && tab_width.is_finite() && tab_width > 0.0)
    {
        return EdgePlan::plain(role, edge_length);
    }

    let gap = min_gap(kerf);
    let candidates = (edge_length / (tab_width + gap)).floor();
    if candidates > MAX_TABS_PER_EDGE as f64 {
        warn!(
            edge_length,
            tab_width,
            limit = MAX_TABS_PER_EDGE,
            "too many tab positions, cutting edge straight"
        );
        return EdgePlan::plain(role, edge_length);
    }
    let mut n = candidates as usize;
    if n % 2 == 1 {
        n -= 1;
    }
    if n < 2 {
        return EdgePlan::plain(role, edge_length);
    }

    let pitch = edge_length / n as f64;
    let nominal = tab_width.min(pitch - gap);
    if nominal <= MIN_FEATURE_WIDTH {
        return EdgePlan::plain(role, edge_length);
    }

    let (width, depth, overcut) = match kind {
        TabKind::Male => ((nominal - kerf).max(MIN_FEATURE_WIDTH), thickness, 0.0),
        TabKind::Female => {
            let over = (kerf * OVERCUT_KERF_FACTOR).max(MIN_OVERCUT);
            ((nominal + kerf).max(MIN_FEATURE_WIDTH), thickness + over, over)
        }
    };

    let mid = edge_length / 2.0;
    let k0 = ((mid / pitch + GEOMETRIC_EPSILON).floor() as usize).min(n - 1);
    // Shift the grid so candidate k0 sits exactly on the midpoint.
    let delta = mid - (k0 as f64 + 0.5) * pitch;
    let keep_out = end_clearance(thickness, kerf) + nominal / 2.0;

    let mut tabs = Vec::new();
    for i in 0..n {
        if (i ^ k0) & 1 == 0 {
            continue;
        }
        let steps = i.abs_diff(k0) as f64;
        let distance_to_end = mid - steps * pitch;
        if distance_to_end + GEOMETRIC_EPSILON < keep_out {
            continue;
        }
        let center = (i as f64 + 0.5) * pitch + delta;
        tabs.push(TabFeature {
            kind,
            center,
            width,
            depth,
            overcut,
        });
    }

    let (males, females) = match kind {
        TabKind::Male => (tabs, Vec::new()),
        TabKind::Female => (Vec::new(), tabs),
    };

    EdgePlan {
        role,
        edge_length,
        tab_count: n,
        pitch,
        feature_width: nominal,
        males,
        females,
    }
}
