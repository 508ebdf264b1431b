/// One canonical contract award, produced exactly once per load by header
/// normalization. Immutable afterward; every aggregate, point layer, and
/// table row derives from these values.
#[derive(Debug, Clone, PartialEq)]
pub struct Award {
    pub action_date: Option<String>,
    pub recipient_name: String,
    pub award_amount: f64,
    pub piid: Option<String>,
    pub set_aside: Option<String>,
    pub state: String,
    pub state_name: String,
    pub pop_city: String,
    pub pop_zip5: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub psc: String,
    pub psc_desc: String,
    pub naics: String,
    pub naics_desc: String,
}

impl Award {
    /// Geographic and chart aggregates admit only positive obligations.
    /// Zero and negative amounts (de-obligations) stay visible in the raw
    /// table but never contribute to maps or rankings.
    pub fn has_positive_amount(&self) -> bool {
        self.award_amount > 0.0
    }

    pub fn geo_eligible(&self) -> bool {
        self.has_positive_amount() && !self.state.is_empty()
    }
}
