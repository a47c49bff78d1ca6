//! VEN rules: the name is an eMI3 party identifier (`NL-ABC`, `NLABC`).

use crate::country::is_alpha2;
use crate::pattern_rule;
use gac_kernel::Constraint;
use gac_kernel::domain::Ven;
use regex::Regex;
use std::sync::LazyLock;

static EMI3: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}-?[A-Z0-9]{3}$"));

pub(crate) fn constraints() -> Vec<Constraint> {
    vec![
        pattern_rule(
            "ven.ven_name.emi3",
            "ven_name",
            "The ven name must be formatted as an eMI3 identifier.",
            &EMI3,
            |v: &Ven, emi3: &Regex| emi3.is_match(&v.ven_name),
        ),
        // Only meaningful once the format holds: the first two characters are then letters.
        pattern_rule(
            "ven.ven_name.country_code",
            "ven_name",
            "The first two characters of the ven name must be a valid ISO 3166-1 alpha-2 country code.",
            &EMI3,
            |v: &Ven, emi3: &Regex| {
                !emi3.is_match(&v.ven_name) || v.ven_name.get(..2).is_some_and(is_alpha2)
            },
        ),
    ]
}
