use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::physics::incline_angle;

/// Fast tillegg for utstyr (kg) som legges på oppgitt masse.
pub const EQUIPMENT_MASS_KG: f64 = 20.0;
/// Utveksling motor → hjul.
pub const GEAR_RATIO: f64 = 4.59;
pub const DEFAULT_WHEEL_RADIUS_M: f64 = 0.6604;

/// Hvordan nødvendig kraft fordeles mellom rytter og motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriveMode {
    Pedal,
    Motor,
    Both,
}

impl DriveMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DriveMode::Pedal => "pedal",
            DriveMode::Motor => "motor",
            DriveMode::Both => "both",
        }
    }
}

impl fmt::Display for DriveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DriveMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pedal" => Ok(DriveMode::Pedal),
            "motor" => Ok(DriveMode::Motor),
            "both" => Ok(DriveMode::Both),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

/// Underlag med tilhørende friksjonstabell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    Snow,
    Ice,
    #[default]
    Default,
}

/// Friksjonskoeffisienter for et underlag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionCoefficients {
    pub mu_static_wheel: f64,
    pub mu_kinetic_skis: f64,
    pub mu_kinetic_wheel: f64,
    pub rolling_resistance: f64,
}

impl Terrain {
    pub fn friction(self) -> FrictionCoefficients {
        match self {
            Terrain::Snow => FrictionCoefficients {
                mu_static_wheel: 0.2,
                mu_kinetic_skis: 0.05,
                mu_kinetic_wheel: 0.3,
                rolling_resistance: 0.05,
            },
            Terrain::Ice => FrictionCoefficients {
                mu_static_wheel: 0.1,
                mu_kinetic_skis: 0.03,
                mu_kinetic_wheel: 0.2,
                rolling_resistance: 0.09,
            },
            Terrain::Default => FrictionCoefficients {
                mu_static_wheel: 0.2,
                mu_kinetic_skis: 0.03,
                mu_kinetic_wheel: 0.25,
                rolling_resistance: 0.01,
            },
        }
    }
}

impl FromStr for Terrain {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snow" => Ok(Terrain::Snow),
            "ice" => Ok(Terrain::Ice),
            "default" => Ok(Terrain::Default),
            _ => Err(ConfigError::UnknownTerrain(s.to_string())),
        }
    }
}

/// Rytterens bidrag: enten direkte kraft (N) eller effekt (W).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PedalInput {
    Force(f64),
    Power(f64),
}

impl Default for PedalInput {
    fn default() -> Self {
        PedalInput::Force(0.0)
    }
}

impl PedalInput {
    fn raw(self) -> f64 {
        match self {
            PedalInput::Force(x) | PedalInput::Power(x) => x,
        }
    }
}

/// Fortegn på kinetisk hjulfriksjon når hjulet spinner.
/// Historiske varianter er uenige; AddToLoad er den autoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlipCorrection {
    #[default]
    AddToLoad,
    SubtractFromLoad,
}

/// Rå input (JSON / skjema). Valideres via `BikeConfiguration::new`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BikeParams {
    /// Rytter + sykkel (kg), uten utstyrstillegg
    pub mass_kg: f64,
    #[serde(default)]
    pub terrain: Terrain,
    #[serde(default)]
    pub mu_static_wheel: Option<f64>,
    #[serde(default)]
    pub mu_kinetic_skis: Option<f64>,
    #[serde(default)]
    pub mu_kinetic_wheel: Option<f64>,
    #[serde(default)]
    pub rolling_resistance: Option<f64>,
    #[serde(default = "default_wheel_radius")]
    pub wheel_radius_m: f64,
    #[serde(default = "default_gear_ratio")]
    pub gear_ratio: f64,
    #[serde(default = "default_max_motor_power")]
    pub max_motor_power_w: f64,
    #[serde(default)]
    pub pedal: PedalInput,
    #[serde(default = "default_battery_voltage")]
    pub battery_voltage_v: f64,
    #[serde(default = "default_battery_capacity")]
    pub battery_capacity_ah: f64,
    #[serde(default = "default_half")]
    pub drag_coefficient: f64,
    #[serde(default = "default_half")]
    pub frontal_area_m2: f64,
    #[serde(default = "default_air_density")]
    pub air_density: f64,
    /// Stigning i prosent (negativ = nedover)
    #[serde(default)]
    pub gradient_pct: f64,
    #[serde(default)]
    pub speed_of_interest_ms: f64,
    #[serde(default)]
    pub slip_correction: SlipCorrection,
}

fn default_wheel_radius() -> f64 {
    DEFAULT_WHEEL_RADIUS_M
}
fn default_gear_ratio() -> f64 {
    GEAR_RATIO
}
fn default_max_motor_power() -> f64 {
    1000.0
}
fn default_battery_voltage() -> f64 {
    48.0
}
fn default_battery_capacity() -> f64 {
    13.0
}
fn default_half() -> f64 {
    0.5
}
fn default_air_density() -> f64 {
    1.225
}

impl BikeParams {
    /// Standardverdier fra skjemaet, kun masse må oppgis.
    pub fn with_mass(mass_kg: f64) -> Self {
        Self {
            mass_kg,
            terrain: Terrain::Default,
            mu_static_wheel: None,
            mu_kinetic_skis: None,
            mu_kinetic_wheel: None,
            rolling_resistance: None,
            wheel_radius_m: DEFAULT_WHEEL_RADIUS_M,
            gear_ratio: GEAR_RATIO,
            max_motor_power_w: default_max_motor_power(),
            pedal: PedalInput::default(),
            battery_voltage_v: default_battery_voltage(),
            battery_capacity_ah: default_battery_capacity(),
            drag_coefficient: 0.5,
            frontal_area_m2: 0.5,
            air_density: default_air_density(),
            gradient_pct: 0.0,
            speed_of_interest_ms: 0.0,
            slip_correction: SlipCorrection::AddToLoad,
        }
    }
}

/// Uforanderlig konfigurasjon for ett simuleringsløp.
#[derive(Debug, Clone, PartialEq)]
pub struct BikeConfiguration {
    /// Inkluderer EQUIPMENT_MASS_KG
    pub mass_kg: f64,
    pub wheel_radius_m: f64,
    pub gear_ratio: f64,
    pub mu_static_wheel: f64,
    pub mu_kinetic_skis: f64,
    pub mu_kinetic_wheel: f64,
    pub rolling_resistance: f64,
    pub max_motor_power_w: f64,
    pub pedal: PedalInput,
    pub battery_voltage_v: f64,
    pub battery_capacity_ah: f64,
    pub drag_coefficient: f64,
    pub frontal_area_m2: f64,
    pub air_density: f64,
    pub gradient_pct: f64,
    /// atan(gradient / 100), radianer
    pub incline_angle: f64,
    pub speed_of_interest_ms: f64,
    pub slip_correction: SlipCorrection,
}

fn finite(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::InvalidParameter {
            field,
            value,
            reason: "must be finite",
        })
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if finite(field, value)? > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidParameter {
            field,
            value,
            reason: "must be > 0",
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if finite(field, value)? >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidParameter {
            field,
            value,
            reason: "must be >= 0",
        })
    }
}

impl BikeConfiguration {
    pub fn new(p: BikeParams) -> Result<Self, ConfigError> {
        let table = p.terrain.friction();
        let gradient_pct = finite("gradient_pct", p.gradient_pct)?;
        non_negative("pedal", p.pedal.raw())?;

        Ok(Self {
            mass_kg: positive("mass_kg", p.mass_kg)? + EQUIPMENT_MASS_KG,
            wheel_radius_m: positive("wheel_radius_m", p.wheel_radius_m)?,
            gear_ratio: positive("gear_ratio", p.gear_ratio)?,
            mu_static_wheel: non_negative(
                "mu_static_wheel",
                p.mu_static_wheel.unwrap_or(table.mu_static_wheel),
            )?,
            mu_kinetic_skis: non_negative(
                "mu_kinetic_skis",
                p.mu_kinetic_skis.unwrap_or(table.mu_kinetic_skis),
            )?,
            mu_kinetic_wheel: non_negative(
                "mu_kinetic_wheel",
                p.mu_kinetic_wheel.unwrap_or(table.mu_kinetic_wheel),
            )?,
            rolling_resistance: non_negative(
                "rolling_resistance",
                p.rolling_resistance.unwrap_or(table.rolling_resistance),
            )?,
            max_motor_power_w: non_negative("max_motor_power_w", p.max_motor_power_w)?,
            pedal: p.pedal,
            battery_voltage_v: positive("battery_voltage_v", p.battery_voltage_v)?,
            battery_capacity_ah: positive("battery_capacity_ah", p.battery_capacity_ah)?,
            drag_coefficient: non_negative("drag_coefficient", p.drag_coefficient)?,
            frontal_area_m2: non_negative("frontal_area_m2", p.frontal_area_m2)?,
            air_density: non_negative("air_density", p.air_density)?,
            gradient_pct,
            incline_angle: incline_angle(gradient_pct),
            speed_of_interest_ms: finite("speed_of_interest_ms", p.speed_of_interest_ms)?,
            slip_correction: p.slip_correction,
        })
    }
}

/// Fasen som vurderes for en gitt fart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionState {
    AtRest,
    InMotion,
}

/// Klassifisering av en fase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    RollingWithoutSlipping,
    Slipping,
    Stalled,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::RollingWithoutSlipping => "rolling_without_slipping",
            Outcome::Slipping => "slipping",
            Outcome::Stalled => "stalled",
        }
    }
}

/// Ett punkt i sweepen (én målfart). Uforanderlig etter opprettelse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationPoint {
    pub speed_ms: f64,
    pub normal_force: f64,
    pub static_friction_ceiling: f64,
    pub rolling_resistance_force: f64,
    pub ski_friction_force: f64,
    pub drag_force: f64,
    /// Last for siste vurderte fase (hvile eller bevegelse)
    pub required_force: f64,
    /// Kinetisk hjulfriksjon (signert) når hjulet spinner, ellers 0
    pub slip_correction_force: f64,
    /// required_force + slip_correction_force; det total_force sammenlignes mot
    pub effective_load: f64,
    pub motor_force: f64,
    pub total_force: f64,
    /// Moment som trengs for å sette sykkelen i bevegelse
    pub motor_torque_required: f64,
    pub motor_torque: f64,
    pub rpm: f64,
    pub mechanical_power_w: f64,
    pub electrical_power_w: f64,
    /// Pedal + mekanisk motoreffekt
    pub total_power_w: f64,
    pub recovered_energy_wh: f64,
    /// f64::INFINITY når motoren ikke trekker strøm
    pub operational_time_h: f64,
    pub battery_range_km: f64,
    /// Kun satt når sykkelen ruller ut og stopper
    pub stopping_distance_m: Option<f64>,
    /// Fasen klassifiseringen kommer fra
    pub phase: MotionState,
    pub outcome: Outcome,
}

/// Resultat av én sweep. Eies av kalleren.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub mode: DriveMode,
    pub points: Vec<SimulationPoint>,
    /// Statusmeldinger, kun for farten som er valgt som "speed of interest"
    pub messages: Vec<String>,
}

impl SimulationReport {
    pub fn point_at(&self, speed_ms: f64) -> Option<&SimulationPoint> {
        self.points.iter().find(|p| p.speed_ms == speed_ms)
    }
}
