//! Postal-code / FIPS translation for the 50 states plus the federal
//! district, used to join award state codes to boundary feature ids.

pub const STATE_COUNT: usize = 51;

const STATES: [(&str, &str, &str); STATE_COUNT] = [
    ("AL", "01", "Alabama"),
    ("AK", "02", "Alaska"),
    ("AZ", "04", "Arizona"),
    ("AR", "05", "Arkansas"),
    ("CA", "06", "California"),
    ("CO", "08", "Colorado"),
    ("CT", "09", "Connecticut"),
    ("DE", "10", "Delaware"),
    ("DC", "11", "District of Columbia"),
    ("FL", "12", "Florida"),
    ("GA", "13", "Georgia"),
    ("HI", "15", "Hawaii"),
    ("ID", "16", "Idaho"),
    ("IL", "17", "Illinois"),
    ("IN", "18", "Indiana"),
    ("IA", "19", "Iowa"),
    ("KS", "20", "Kansas"),
    ("KY", "21", "Kentucky"),
    ("LA", "22", "Louisiana"),
    ("ME", "23", "Maine"),
    ("MD", "24", "Maryland"),
    ("MA", "25", "Massachusetts"),
    ("MI", "26", "Michigan"),
    ("MN", "27", "Minnesota"),
    ("MS", "28", "Mississippi"),
    ("MO", "29", "Missouri"),
    ("MT", "30", "Montana"),
    ("NE", "31", "Nebraska"),
    ("NV", "32", "Nevada"),
    ("NH", "33", "New Hampshire"),
    ("NJ", "34", "New Jersey"),
    ("NM", "35", "New Mexico"),
    ("NY", "36", "New York"),
    ("NC", "37", "North Carolina"),
    ("ND", "38", "North Dakota"),
    ("OH", "39", "Ohio"),
    ("OK", "40", "Oklahoma"),
    ("OR", "41", "Oregon"),
    ("PA", "42", "Pennsylvania"),
    ("RI", "44", "Rhode Island"),
    ("SC", "45", "South Carolina"),
    ("SD", "46", "South Dakota"),
    ("TN", "47", "Tennessee"),
    ("TX", "48", "Texas"),
    ("UT", "49", "Utah"),
    ("VT", "50", "Vermont"),
    ("VA", "51", "Virginia"),
    ("WA", "53", "Washington"),
    ("WV", "54", "West Virginia"),
    ("WI", "55", "Wisconsin"),
    ("WY", "56", "Wyoming"),
];

pub fn abbr_to_fips(abbr: &str) -> Option<&'static str> {
    STATES
        .iter()
        .find(|(code, _, _)| code.eq_ignore_ascii_case(abbr))
        .map(|(_, fips, _)| *fips)
}

pub fn fips_to_abbr(fips: &str) -> Option<&'static str> {
    STATES
        .iter()
        .find(|(_, code, _)| *code == fips)
        .map(|(abbr, _, _)| *abbr)
}

pub fn state_display_name(abbr: &str) -> Option<&'static str> {
    STATES
        .iter()
        .find(|(code, _, _)| code.eq_ignore_ascii_case(abbr))
        .map(|(_, _, name)| *name)
}

pub fn is_known_state(abbr: &str) -> bool {
    abbr_to_fips(abbr).is_some()
}
