//! Camera record types as returned by the Camera Directory Service

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::view::MISSING_FIELD;

pub type CameraId = u64;

/// User-controlled state of a camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraStatus {
    Active,
    Inactive,
}

impl CameraStatus {
    pub fn toggled(self) -> Self {
        match self {
            CameraStatus::Active => CameraStatus::Inactive,
            CameraStatus::Inactive => CameraStatus::Active,
        }
    }

    /// Connectivity shown for a camera in this state
    pub fn mirrored_connectivity(self) -> Connectivity {
        match self {
            CameraStatus::Active => Connectivity::Online,
            CameraStatus::Inactive => Connectivity::Offline,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CameraStatus::Active => "Active",
            CameraStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for CameraStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CameraStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(CameraStatus::Active),
            "Inactive" => Ok(CameraStatus::Inactive),
            other => Err(format!("Unknown camera status '{}'", other)),
        }
    }
}

/// Externally reported connectivity, display only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connectivity {
    Online,
    Offline,
}

/// Health grade, A best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum HealthGrade {
    A,
    B,
    C,
    D,
    E,
    F,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CameraHealth {
    pub cloud: HealthGrade,
    pub device: HealthGrade,
}

// Some directory builds send health as a bare string; anything that is not
// an object reads as ungraded instead of failing the whole list
impl<'de> Deserialize<'de> for CameraHealth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum HealthHelper {
            Graded {
                #[serde(default)]
                cloud: HealthGrade,
                #[serde(default)]
                device: HealthGrade,
            },
            Ungraded(serde::de::IgnoredAny),
        }

        Ok(match HealthHelper::deserialize(deserializer)? {
            HealthHelper::Graded { cloud, device } => CameraHealth { cloud, device },
            HealthHelper::Ungraded(_) => CameraHealth::default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub id: CameraId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub recorder: Option<String>,
    #[serde(default)]
    pub tasks: Option<serde_json::Value>,
    pub status: CameraStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_status: Option<Connectivity>,
    #[serde(default)]
    pub health: CameraHealth,
    #[serde(rename = "hasWarning", default)]
    pub has_warning: bool,
}

impl Camera {
    /// Recorder for search matching; absent reads as empty
    pub fn recorder_or_empty(&self) -> &str {
        self.recorder.as_deref().unwrap_or("")
    }

    pub fn recorder_label(&self) -> String {
        match self.recorder.as_deref() {
            Some(recorder) if !recorder.is_empty() => recorder.to_string(),
            _ => MISSING_FIELD.to_string(),
        }
    }

    pub fn tasks_label(&self) -> String {
        match &self.tasks {
            Some(serde_json::Value::String(s)) if !s.is_empty() => s.clone(),
            Some(serde_json::Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
            Some(serde_json::Value::Array(items)) if !items.is_empty() => items.len().to_string(),
            _ => MISSING_FIELD.to_string(),
        }
    }

    /// Apply a confirmed status change, keeping connectivity in step when tracked
    pub fn apply_status(&mut self, status: CameraStatus) {
        self.status = status;
        if self.current_status.is_some() {
            self.current_status = Some(status.mirrored_connectivity());
        }
    }
}
