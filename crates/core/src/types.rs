use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::ops::Deref;

/// Upstream network identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkId(pub u32);

impl NetworkId {
    /// Synchro Bus (Chambéry)
    pub const SYNCHRO_BUS: NetworkId = NetworkId(3);
}

impl Default for NetworkId {
    fn default() -> Self {
        Self::SYNCHRO_BUS
    }
}

impl std::fmt::Display for NetworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An upstream entity together with the exact JSON it was read from.
///
/// The typed view is best-effort: fields that are missing, `null` or of an
/// unexpected type read as their default. Serializing a `Raw` emits the
/// original JSON untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Raw<T> {
    value: T,
    json: Value,
}

impl<T: DeserializeOwned + Default> Raw<T> {
    pub fn from_json(json: Value) -> Self {
        let value = T::deserialize(&json).unwrap_or_default();
        Self { value, json }
    }
}

impl<T> Raw<T> {
    pub fn json(&self) -> &Value {
        &self.json
    }

    pub fn into_json(self) -> Value {
        self.json
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Raw<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<'de, T: DeserializeOwned + Default> Deserialize<'de> for Raw<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_json)
    }
}

impl<T> Serialize for Raw<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.json.serialize(serializer)
    }
}

// Field readers that never fail; bad values fall back to the default.

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Strings, with numbers and booleans rendered as text.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Arrays read item by item, so one bad entry does not drop the rest.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| T::deserialize(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    })
}

/// Transit network description
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Network {
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub network_loaded: bool,
    #[serde(deserialize_with = "lenient")]
    pub tripplanner_loaded: bool,
    #[serde(deserialize_with = "lenient")]
    pub lat: f64,
    #[serde(deserialize_with = "lenient")]
    pub lon: f64,
    #[serde(deserialize_with = "lenient_seq")]
    pub modes: Vec<String>,
}

/// Sub-network a line belongs to
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SubNetwork {
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
}

/// Transit line
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Line {
    #[serde(deserialize_with = "lenient_text")]
    pub operator_id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    /// Short name, e.g. "B"
    #[serde(deserialize_with = "lenient_text")]
    pub s_name: String,
    /// Long name
    #[serde(deserialize_with = "lenient_text")]
    pub l_name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub mode: String,
    #[serde(deserialize_with = "lenient")]
    pub sub_network: Option<SubNetwork>,
    #[serde(deserialize_with = "lenient_text")]
    pub color: String,
    #[serde(deserialize_with = "lenient_text")]
    pub text_color: String,
}

/// Stop area served by a line
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StopArea {
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub lat: f64,
    #[serde(deserialize_with = "lenient")]
    pub lon: f64,
    #[serde(deserialize_with = "lenient_text")]
    pub city: String,
    #[serde(deserialize_with = "lenient_text")]
    pub postal_code: String,
}

/// Departure at a stop area
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Schedule {
    #[serde(deserialize_with = "lenient_text")]
    pub business_date: String,
    #[serde(deserialize_with = "lenient_text")]
    pub vehicle_journey_id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub destination_display: String,
    #[serde(deserialize_with = "lenient_text")]
    pub departure_date_time: String,
    /// Minutes until departure
    #[serde(deserialize_with = "lenient")]
    pub departure_wait: i64,
    #[serde(deserialize_with = "lenient")]
    pub precision: i64,
    #[serde(deserialize_with = "lenient")]
    pub real_time: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisruptionMessage {
    #[serde(deserialize_with = "lenient_text")]
    pub text: String,
}

/// Service disruption on the network
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Disruption {
    #[serde(deserialize_with = "lenient_text")]
    pub operator_id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(deserialize_with = "lenient_seq")]
    pub messages: Vec<DisruptionMessage>,
    #[serde(deserialize_with = "lenient_text")]
    pub level: String,
    #[serde(deserialize_with = "lenient_text")]
    pub issue_date: String,
    #[serde(deserialize_with = "lenient_text")]
    pub start_validity: String,
    #[serde(deserialize_with = "lenient_text")]
    pub end_validity: String,
}

/// One direction of travel for a line
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleJourneyDirection {
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub s_name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub l_name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub direction: String,
    #[serde(deserialize_with = "lenient")]
    pub line: Option<Line>,
    #[serde(deserialize_with = "lenient_seq")]
    pub stop_areas: Vec<StopArea>,
}

/// Action a client can offer on a point of interest
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PoiAction {
    #[serde(deserialize_with = "lenient_text")]
    pub element_type: String,
    #[serde(deserialize_with = "lenient_text")]
    pub action_type: String,
    #[serde(deserialize_with = "lenient")]
    pub enabled: bool,
    #[serde(deserialize_with = "lenient_text")]
    pub label_key: String,
    #[serde(deserialize_with = "lenient")]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProximityStopArea {
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub lat: f64,
    #[serde(deserialize_with = "lenient")]
    pub lon: f64,
    #[serde(deserialize_with = "lenient_text")]
    pub city: String,
    #[serde(deserialize_with = "lenient_seq")]
    pub modes: Vec<String>,
    #[serde(deserialize_with = "lenient_seq")]
    pub lines: Vec<Line>,
    #[serde(deserialize_with = "lenient_seq")]
    pub commercial_modes: Vec<Value>,
    #[serde(deserialize_with = "lenient_seq")]
    pub actions: Vec<PoiAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocalizedNames {
    #[serde(deserialize_with = "lenient_text")]
    pub en: String,
    #[serde(deserialize_with = "lenient_text")]
    pub fr: String,
    #[serde(deserialize_with = "lenient_text")]
    pub nl: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BikePark {
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(rename = "type", deserialize_with = "lenient_text")]
    pub kind: String,
    #[serde(deserialize_with = "lenient_text")]
    pub operator_id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub names: Option<LocalizedNames>,
    #[serde(deserialize_with = "lenient")]
    pub lat: f64,
    #[serde(deserialize_with = "lenient")]
    pub lon: f64,
    #[serde(deserialize_with = "lenient")]
    pub covered: bool,
    #[serde(deserialize_with = "lenient")]
    pub capacity: i64,
    #[serde(deserialize_with = "lenient_text")]
    pub city: String,
    #[serde(deserialize_with = "lenient_seq")]
    pub actions: Vec<PoiAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParkAndRide {
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(rename = "type", deserialize_with = "lenient_text")]
    pub kind: String,
    #[serde(deserialize_with = "lenient_text")]
    pub operator_id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub lat: f64,
    #[serde(deserialize_with = "lenient")]
    pub lon: f64,
    #[serde(deserialize_with = "lenient_text")]
    pub city: String,
    #[serde(deserialize_with = "lenient_text")]
    pub picto: String,
    #[serde(deserialize_with = "lenient")]
    pub capacity: i64,
    #[serde(rename = "capacityPRM", deserialize_with = "lenient")]
    pub capacity_prm: i64,
    #[serde(deserialize_with = "lenient")]
    pub availability: i64,
    #[serde(deserialize_with = "lenient")]
    pub available_parks: i64,
    #[serde(rename = "availableParksPRM", deserialize_with = "lenient")]
    pub available_parks_prm: i64,
    #[serde(deserialize_with = "lenient_seq")]
    pub actions: Vec<PoiAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SignUpLink {
    #[serde(deserialize_with = "lenient_text")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SharedVehicle {
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub info: String,
    #[serde(deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(deserialize_with = "lenient_text")]
    pub engine_type: String,
    #[serde(deserialize_with = "lenient_text")]
    pub brand: String,
    #[serde(deserialize_with = "lenient_text")]
    pub model: String,
    #[serde(deserialize_with = "lenient_text")]
    pub photo: String,
    #[serde(deserialize_with = "lenient")]
    pub seats: i64,
    #[serde(deserialize_with = "lenient_seq")]
    pub actions: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarSharingStation {
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub operator_id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub gis_type_id: String,
    #[serde(rename = "type", deserialize_with = "lenient_text")]
    pub kind: String,
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub address: String,
    #[serde(deserialize_with = "lenient_text")]
    pub city: String,
    #[serde(deserialize_with = "lenient")]
    pub lat: f64,
    #[serde(deserialize_with = "lenient")]
    pub lon: f64,
    #[serde(deserialize_with = "lenient")]
    pub available_vehicles: i64,
    #[serde(deserialize_with = "lenient")]
    pub available_spots: i64,
    #[serde(deserialize_with = "lenient")]
    pub sign_up_link: Option<SignUpLink>,
    #[serde(deserialize_with = "lenient_seq")]
    pub vehicles: Vec<SharedVehicle>,
    #[serde(deserialize_with = "lenient_seq")]
    pub actions: Vec<PoiAction>,
}

/// A point of interest near a location.
///
/// The upstream sets exactly one of the optional sub-objects; `kind()` reports
/// which one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Proximity {
    /// Distance from the searched location, in meters
    #[serde(deserialize_with = "lenient")]
    pub distance: f64,
    #[serde(deserialize_with = "lenient")]
    pub stop_area: Option<ProximityStopArea>,
    #[serde(deserialize_with = "lenient")]
    pub bike_park: Option<BikePark>,
    #[serde(deserialize_with = "lenient")]
    pub park_and_ride: Option<ParkAndRide>,
    #[serde(deserialize_with = "lenient")]
    pub car_sharing_station: Option<CarSharingStation>,
}

/// Category of a proximity result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProximityKind {
    StopArea,
    BikePark,
    ParkAndRide,
    CarSharingStation,
}

impl Proximity {
    pub fn kind(&self) -> Option<ProximityKind> {
        if self.stop_area.is_some() {
            Some(ProximityKind::StopArea)
        } else if self.bike_park.is_some() {
            Some(ProximityKind::BikePark)
        } else if self.park_and_ride.is_some() {
            Some(ProximityKind::ParkAndRide)
        } else if self.car_sharing_station.is_some() {
            Some(ProximityKind::CarSharingStation)
        } else {
            None
        }
    }
}

/// Body of the proximity endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProximityResponse {
    #[serde(deserialize_with = "lenient_seq")]
    pub proximities: Vec<Proximity>,
    #[serde(deserialize_with = "lenient_seq")]
    pub shapes: Vec<Value>,
}
