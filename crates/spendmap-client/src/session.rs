use std::collections::BTreeMap;

use crate::aggregate::{
    DEFAULT_RECIPIENT_LIMIT, RecipientAggregate, StateAggregate, aggregate_by_state, top_recipients,
};
use crate::award::Award;
use crate::filter::{GeoFilter, Metric};
use crate::geo::GeoCatalog;
use crate::geo::fips;
use crate::geo::points::{PointLayer, build_point_layer};
use crate::{ClientError, ClientResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    National,
    State,
}

impl ViewMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::National => "national",
            Self::State => "state",
        }
    }
}

/// The single source of truth for which view and layers are exposed.
/// Owned exclusively by `DashboardSession`; mutated only through its
/// transition methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillState {
    pub mode: ViewMode,
    pub selected_state: Option<String>,
    pub points_visible: bool,
}

impl DrillState {
    fn national() -> Self {
        Self {
            mode: ViewMode::National,
            selected_state: None,
            points_visible: false,
        }
    }
}

/// Everything a render pass needs, rebuilt as one unit. Swapping whole
/// frames is what keeps the sidebar, map, and table on the same
/// (state, psc, naics) triple: no partially updated view is ever
/// observable.
#[derive(Debug)]
struct ViewFrame {
    state_aggregates: BTreeMap<String, StateAggregate>,
    recipients: Vec<RecipientAggregate>,
    points: Option<PointLayer>,
}

#[derive(Debug)]
pub struct DashboardSession {
    awards: Vec<Award>,
    filter: GeoFilter,
    metric: Metric,
    recipient_limit: usize,
    drill: DrillState,
    geo: GeoCatalog,
    frame: ViewFrame,
}

impl DashboardSession {
    pub fn new(awards: Vec<Award>, geo: GeoCatalog, filter: GeoFilter, metric: Metric) -> Self {
        let mut session = Self {
            awards,
            filter,
            metric,
            recipient_limit: DEFAULT_RECIPIENT_LIMIT,
            drill: DrillState::national(),
            geo,
            frame: ViewFrame {
                state_aggregates: BTreeMap::new(),
                recipients: Vec::new(),
                points: None,
            },
        };
        session.frame = session.build_frame(None);
        session
    }

    pub fn with_recipient_limit(mut self, limit: usize) -> Self {
        self.recipient_limit = limit;
        self.frame = self.build_frame(self.drill.selected_state.clone().as_deref());
        self
    }

    pub fn drill_state(&self) -> &DrillState {
        &self.drill
    }

    pub fn filter(&self) -> &GeoFilter {
        &self.filter
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn awards(&self) -> &[Award] {
        &self.awards
    }

    pub fn geo(&self) -> &GeoCatalog {
        &self.geo
    }

    pub fn state_aggregates(&self) -> &BTreeMap<String, StateAggregate> {
        &self.frame.state_aggregates
    }

    pub fn top_recipients(&self) -> &[RecipientAggregate] {
        &self.frame.recipients
    }

    pub fn point_layer(&self) -> Option<&PointLayer> {
        self.frame.points.as_ref()
    }

    /// Filter or metric change. In state mode this is the in-place
    /// self-transition (outline unchanged, recipients and points rebuilt)
    /// unless the change clears the filter entirely, which is the
    /// documented route back to national.
    pub fn on_filter_change(&mut self, filter: GeoFilter, metric: Metric) {
        let clearing = !self.filter.is_empty() && filter.is_empty();
        self.filter = filter;
        self.metric = metric;

        if self.drill.mode == ViewMode::State && clearing {
            self.on_back_to_national();
            return;
        }

        let selected = self.drill.selected_state.clone();
        self.frame = self.build_frame(selected.as_deref());
        if self.drill.mode == ViewMode::State {
            self.drill.points_visible = self
                .frame
                .points
                .as_ref()
                .map(|layer| !layer.is_empty())
                .unwrap_or(false);
        }
    }

    /// `national → state(code)` (or the idempotent state→same-state
    /// re-selection). The frame is rebuilt before the drill state is
    /// updated, so a failed build never leaves a half-transitioned view.
    pub fn on_state_selected(&mut self, code: &str) -> ClientResult<()> {
        let normalized = code.trim().to_uppercase();
        let Some(state_fips) = fips::abbr_to_fips(&normalized) else {
            return Err(ClientError::unknown_state_code(code));
        };

        if !self.geo.boundaries().has_state(state_fips) {
            // No outline to draw: reset cleanly instead of presenting a
            // state view with nothing under it.
            self.on_back_to_national();
            return Err(ClientError::state_boundary_missing(&normalized));
        }

        self.frame = self.build_frame(Some(&normalized));
        let has_points = self
            .frame
            .points
            .as_ref()
            .map(|layer| !layer.is_empty())
            .unwrap_or(false);
        self.drill = DrillState {
            mode: ViewMode::State,
            selected_state: Some(normalized),
            points_visible: has_points,
        };
        Ok(())
    }

    /// `state → national`: the state's point layer and recipient list are
    /// discarded with the old frame.
    pub fn on_back_to_national(&mut self) {
        self.frame = self.build_frame(None);
        self.drill = DrillState::national();
    }

    /// Visibility flips without touching the point set, except when no
    /// layer exists yet for the current state and filters; then turning
    /// points on builds one. Returns the new visibility.
    pub fn on_toggle_points(&mut self) -> bool {
        if self.drill.points_visible {
            self.drill.points_visible = false;
            return false;
        }

        if self.frame.points.is_none()
            && let Some(state) = self.drill.selected_state.clone()
        {
            self.frame.points = Some(build_point_layer(
                &self.awards,
                &state,
                &self.filter,
                self.geo.centroids(),
            ));
        }

        self.drill.points_visible = true;
        true
    }

    fn build_frame(&self, state: Option<&str>) -> ViewFrame {
        let state_aggregates = aggregate_by_state(&self.awards, &self.filter);
        let recipients = top_recipients(&self.awards, state, &self.filter, self.recipient_limit);
        let points = state.map(|code| {
            build_point_layer(&self.awards, code, &self.filter, self.geo.centroids())
        });

        ViewFrame {
            state_aggregates,
            recipients,
            points,
        }
    }
}
