use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The JSON document served at `/account-balances.json`.
///
/// `dates` carries one display label per sample point; every series in
/// `balances` is index-aligned with it. Equal lengths are assumed from
/// the producer, not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancesResource {
    /// X-axis display labels, one per sample point. A payload without
    /// the field yields an empty label list.
    #[serde(default)]
    pub dates: Vec<String>,
    /// Account name to balance series, kept in payload key order.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_ordered_balances",
        serialize_with = "serialize_ordered_balances"
    )]
    pub balances: Option<Vec<(String, Vec<f64>)>>,
}

impl BalancesResource {
    /// Number of accounts in the payload, zero when `balances` is absent.
    pub fn account_count(&self) -> usize {
        self.balances.as_ref().map(Vec::len).unwrap_or(0)
    }
}

/// Deserialize the `balances` object into a vector of entries so the
/// payload's key insertion order survives; a plain map type would
/// reorder the accounts.
fn deserialize_ordered_balances<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<(String, Vec<f64>)>>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedBalances;

    impl<'de> Visitor<'de> for OrderedBalances {
        type Value = Vec<(String, Vec<f64>)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of account names to balance series")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((account, series)) = access.next_entry::<String, Vec<f64>>()? {
                entries.push((account, series));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(OrderedBalances).map(Some)
}

fn serialize_ordered_balances<S>(
    value: &Option<Vec<(String, Vec<f64>)>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(entries) => {
            let mut map = serializer.serialize_map(Some(entries.len()))?;
            for (account, series) in entries {
                map.serialize_entry(account, series)?;
            }
            map.end()
        }
        None => serializer.serialize_none(),
    }
}
