use crate::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    #[default]
    Light,
    Fan,
    Ac,
    Camera,
}

impl DeviceType {
    pub const ALL: [DeviceType; 4] = [
        DeviceType::Light,
        DeviceType::Fan,
        DeviceType::Ac,
        DeviceType::Camera,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Light => "light",
            DeviceType::Fan => "fan",
            DeviceType::Ac => "ac",
            DeviceType::Camera => "camera",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DeviceType::Light => "💡 Light",
            DeviceType::Fan => "🌪️ Fan",
            DeviceType::Ac => "❄️ A/C",
            DeviceType::Camera => "📹 Camera",
        }
    }

    /// Slider label for types with an adjustable level
    pub fn control_label(&self) -> Option<&'static str> {
        match self {
            DeviceType::Light => Some("Brightness"),
            DeviceType::Fan => Some("Speed"),
            _ => None,
        }
    }

    pub fn default_value(&self) -> u8 {
        match self {
            DeviceType::Light | DeviceType::Fan => 50,
            _ => 20,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Device {
    pub id: u64,
    pub name: String,
    pub room: String,
    pub device_type: DeviceType,
    pub is_on: bool,
    pub value: Option<u8>,
}

impl Device {
    pub fn status_text(&self) -> String {
        if self.is_on {
            format!("ON ({}%)", self.value.unwrap_or(0))
        } else {
            "OFF".to_string()
        }
    }
}

/// Input of the "add device" form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceDraft {
    pub name: String,
    pub room: String,
    pub device_type: DeviceType,
}

impl DeviceDraft {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() || self.room.trim().is_empty() {
            return Err(AppError::Validation("Please fill in all fields.".to_string()));
        }
        Ok(())
    }
}

pub fn initial_devices() -> Vec<Device> {
    vec![
        Device {
            id: 1,
            name: "Living Room Light".to_string(),
            room: "Living Room".to_string(),
            device_type: DeviceType::Light,
            is_on: true,
            value: Some(75),
        },
        Device {
            id: 2,
            name: "Bedroom Fan".to_string(),
            room: "Bedroom".to_string(),
            device_type: DeviceType::Fan,
            is_on: false,
            value: Some(50),
        },
        Device {
            id: 3,
            name: "Kitchen AC".to_string(),
            room: "Kitchen".to_string(),
            device_type: DeviceType::Ac,
            is_on: true,
            value: Some(22),
        },
        Device {
            id: 4,
            name: "Front Door Cam".to_string(),
            room: "Entrance".to_string(),
            device_type: DeviceType::Camera,
            is_on: true,
            value: None,
        },
    ]
}

/// Device list of the smart-home dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub devices: Vec<Device>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            devices: initial_devices(),
        }
    }

    pub fn get(&self, id: u64) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    pub fn toggle(&mut self, id: u64, is_on: bool) {
        if let Some(device) = self.devices.iter_mut().find(|d| d.id == id) {
            device.is_on = is_on;
        }
    }

    /// Stores a slider level, rounded and clamped to 0..=100
    pub fn update_value(&mut self, id: u64, value: f64) {
        if let Some(device) = self.devices.iter_mut().find(|d| d.id == id) {
            device.value = Some(value.round().clamp(0.0, 100.0) as u8);
        }
    }

    /// Appends a new device (switched off) and returns its id
    pub fn add_device(&mut self, draft: DeviceDraft) -> Result<u64, AppError> {
        draft.validate()?;

        let id = self.devices.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        self.devices.push(Device {
            id,
            name: draft.name.trim().to_string(),
            room: draft.room.trim().to_string(),
            device_type: draft.device_type,
            is_on: false,
            value: Some(draft.device_type.default_value()),
        });
        log::debug!("Added device {} ({})", id, draft.device_type.as_str());
        Ok(id)
    }

    pub fn remove(&mut self, id: u64) {
        self.devices.retain(|d| d.id != id);
    }
}
