//! Command codes
//!
//! The `OpCode` space. Codes are grouped in hex blocks by feature area
//! (`0x06xx` is monitoring, `0x04xx` device operations, ...); the blocks are
//! not contiguous and gaps are deliberately left unregistered.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{deserialize_code, serialize_code, CodeSpace, CodeSpaceKind};

/// Operation requests and monitor events carried in `OpCode`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i64)]
pub enum CommandCode {
    #[default]
    /// Sentinel for any unregistered code
    Unknown = 0x0000,

    // Test harness
    TestStart = 0xFFFE,
    TestStop = 0xFFFF,

    // Compute (0x00xx)
    StartCompute = 0x0001,
    StopCompute = 0x0002,

    // Compare (0x01xx)
    StartCompare = 0x0101,
    StopCompare = 0x0102,

    // Deploy (0x02xx)
    StartDeploy = 0x0201,
    StopDeploy = 0x0202,
    StartManufactureDeploy = 0x0203,
    StopManufactureDeploy = 0x0204,

    // Topology scan and device sync (0x03xx)
    StartScanTopology = 0x0301,
    StopScanTopology = 0x0302,
    StartSyncDevices = 0x0303,
    StopSyncDevices = 0x0304,

    // Device operations (0x04xx)
    StartDeviceDiscovery = 0x0401,
    StartRetryConnect = 0x0402,
    StartLinkSequenceDetect = 0x0403,
    StartSetNetworkSetting = 0x0404,
    StopDeviceDiscovery = 0x0405,
    StartReboot = 0x0406,
    StartFactoryDefault = 0x0407,
    StartFirmwareUpgrade = 0x0408,
    StartEnableSnmp = 0x0409,
    StartLocator = 0x040A,
    StartGetEventLog = 0x040B,
    StartServicePlatform = 0x040E,
    StopServicePlatform = 0x040F,
    StartDeviceConfig = 0x0410,
    StopDeviceConfig = 0x0411,
    StartDeviceCommandLine = 0x0412,
    StopDeviceCommandLine = 0x0413,
    StopReboot = 0x041A,
    StopFactoryDefault = 0x041B,
    StopFirmwareUpgrade = 0x041C,
    StopLocator = 0x041E,

    // Device profile probing (0x05xx)
    StartProbeDeviceProfile = 0x0501,
    StopProbeDeviceProfile = 0x0502,

    // Monitor (0x06xx)
    StartMonitor = 0x0601,
    StopMonitor = 0x0602,
    MonitorAliveUpdate = 0x0603,
    MonitorStatusUpdate = 0x0604,
    MonitorTrafficUpdate = 0x0605,
    MonitorTimeStatusUpdate = 0x0606,
    MonitorEndpointUpdate = 0x0607,
    MonitorSwiftStatusUpdate = 0x0608,

    // Topology mapping (0x07xx)
    StartTopologyMapping = 0x0701,
    StopTopologyMapping = 0x0702,
    StartScanMapping = 0x0703,
    StopScanMapping = 0x0704,

    // Intelligent assistant (0x08xx)
    StartIntelligentRequest = 0x0801,
    StopIntelligentRequest = 0x0802,
    StartIntelligentQuestionnaireDownload = 0x0803,
    StopIntelligentQuestionnaireDownload = 0x0804,
    StartIntelligentQuestionnaireUpload = 0x0805,
    StopIntelligentQuestionnaireUpload = 0x0806,

    // Device config export/import (0x09xx)
    StartExportDeviceConfig = 0x0901,
    StopExportDeviceConfig = 0x0902,
    StartImportDeviceConfig = 0x0903,
    StopImportDeviceConfig = 0x0904,

    // Project patch updates (0x10xx)
    PatchUpdate = 0x1001,
    FeaturesAvailableStatus = 0x1002,

    // Project data (0x80xx)
    GetProjectDataVersion = 0x8001,
}

impl CommandCode {
    /// Every registered command code, sentinel first
    pub const ALL: [CommandCode; 63] = [
        CommandCode::Unknown,
        CommandCode::TestStart,
        CommandCode::TestStop,
        CommandCode::StartCompute,
        CommandCode::StopCompute,
        CommandCode::StartCompare,
        CommandCode::StopCompare,
        CommandCode::StartDeploy,
        CommandCode::StopDeploy,
        CommandCode::StartManufactureDeploy,
        CommandCode::StopManufactureDeploy,
        CommandCode::StartScanTopology,
        CommandCode::StopScanTopology,
        CommandCode::StartSyncDevices,
        CommandCode::StopSyncDevices,
        CommandCode::StartDeviceDiscovery,
        CommandCode::StartRetryConnect,
        CommandCode::StartLinkSequenceDetect,
        CommandCode::StartSetNetworkSetting,
        CommandCode::StopDeviceDiscovery,
        CommandCode::StartReboot,
        CommandCode::StartFactoryDefault,
        CommandCode::StartFirmwareUpgrade,
        CommandCode::StartEnableSnmp,
        CommandCode::StartLocator,
        CommandCode::StartGetEventLog,
        CommandCode::StartServicePlatform,
        CommandCode::StopServicePlatform,
        CommandCode::StartDeviceConfig,
        CommandCode::StopDeviceConfig,
        CommandCode::StartDeviceCommandLine,
        CommandCode::StopDeviceCommandLine,
        CommandCode::StopReboot,
        CommandCode::StopFactoryDefault,
        CommandCode::StopFirmwareUpgrade,
        CommandCode::StopLocator,
        CommandCode::StartProbeDeviceProfile,
        CommandCode::StopProbeDeviceProfile,
        CommandCode::StartMonitor,
        CommandCode::StopMonitor,
        CommandCode::MonitorAliveUpdate,
        CommandCode::MonitorStatusUpdate,
        CommandCode::MonitorTrafficUpdate,
        CommandCode::MonitorTimeStatusUpdate,
        CommandCode::MonitorEndpointUpdate,
        CommandCode::MonitorSwiftStatusUpdate,
        CommandCode::StartTopologyMapping,
        CommandCode::StopTopologyMapping,
        CommandCode::StartScanMapping,
        CommandCode::StopScanMapping,
        CommandCode::StartIntelligentRequest,
        CommandCode::StopIntelligentRequest,
        CommandCode::StartIntelligentQuestionnaireDownload,
        CommandCode::StopIntelligentQuestionnaireDownload,
        CommandCode::StartIntelligentQuestionnaireUpload,
        CommandCode::StopIntelligentQuestionnaireUpload,
        CommandCode::StartExportDeviceConfig,
        CommandCode::StopExportDeviceConfig,
        CommandCode::StartImportDeviceConfig,
        CommandCode::StopImportDeviceConfig,
        CommandCode::PatchUpdate,
        CommandCode::FeaturesAvailableStatus,
        CommandCode::GetProjectDataVersion,
    ];

    /// Resolve a raw `OpCode`; unregistered values map to `Unknown`
    pub fn from_i64(raw: i64) -> Self {
        match raw {
            0xFFFE => CommandCode::TestStart,
            0xFFFF => CommandCode::TestStop,
            0x0001 => CommandCode::StartCompute,
            0x0002 => CommandCode::StopCompute,
            0x0101 => CommandCode::StartCompare,
            0x0102 => CommandCode::StopCompare,
            0x0201 => CommandCode::StartDeploy,
            0x0202 => CommandCode::StopDeploy,
            0x0203 => CommandCode::StartManufactureDeploy,
            0x0204 => CommandCode::StopManufactureDeploy,
            0x0301 => CommandCode::StartScanTopology,
            0x0302 => CommandCode::StopScanTopology,
            0x0303 => CommandCode::StartSyncDevices,
            0x0304 => CommandCode::StopSyncDevices,
            0x0401 => CommandCode::StartDeviceDiscovery,
            0x0402 => CommandCode::StartRetryConnect,
            0x0403 => CommandCode::StartLinkSequenceDetect,
            0x0404 => CommandCode::StartSetNetworkSetting,
            0x0405 => CommandCode::StopDeviceDiscovery,
            0x0406 => CommandCode::StartReboot,
            0x0407 => CommandCode::StartFactoryDefault,
            0x0408 => CommandCode::StartFirmwareUpgrade,
            0x0409 => CommandCode::StartEnableSnmp,
            0x040A => CommandCode::StartLocator,
            0x040B => CommandCode::StartGetEventLog,
            0x040E => CommandCode::StartServicePlatform,
            0x040F => CommandCode::StopServicePlatform,
            0x0410 => CommandCode::StartDeviceConfig,
            0x0411 => CommandCode::StopDeviceConfig,
            0x0412 => CommandCode::StartDeviceCommandLine,
            0x0413 => CommandCode::StopDeviceCommandLine,
            0x041A => CommandCode::StopReboot,
            0x041B => CommandCode::StopFactoryDefault,
            0x041C => CommandCode::StopFirmwareUpgrade,
            0x041E => CommandCode::StopLocator,
            0x0501 => CommandCode::StartProbeDeviceProfile,
            0x0502 => CommandCode::StopProbeDeviceProfile,
            0x0601 => CommandCode::StartMonitor,
            0x0602 => CommandCode::StopMonitor,
            0x0603 => CommandCode::MonitorAliveUpdate,
            0x0604 => CommandCode::MonitorStatusUpdate,
            0x0605 => CommandCode::MonitorTrafficUpdate,
            0x0606 => CommandCode::MonitorTimeStatusUpdate,
            0x0607 => CommandCode::MonitorEndpointUpdate,
            0x0608 => CommandCode::MonitorSwiftStatusUpdate,
            0x0701 => CommandCode::StartTopologyMapping,
            0x0702 => CommandCode::StopTopologyMapping,
            0x0703 => CommandCode::StartScanMapping,
            0x0704 => CommandCode::StopScanMapping,
            0x0801 => CommandCode::StartIntelligentRequest,
            0x0802 => CommandCode::StopIntelligentRequest,
            0x0803 => CommandCode::StartIntelligentQuestionnaireDownload,
            0x0804 => CommandCode::StopIntelligentQuestionnaireDownload,
            0x0805 => CommandCode::StartIntelligentQuestionnaireUpload,
            0x0806 => CommandCode::StopIntelligentQuestionnaireUpload,
            0x0901 => CommandCode::StartExportDeviceConfig,
            0x0902 => CommandCode::StopExportDeviceConfig,
            0x0903 => CommandCode::StartImportDeviceConfig,
            0x0904 => CommandCode::StopImportDeviceConfig,
            0x1001 => CommandCode::PatchUpdate,
            0x1002 => CommandCode::FeaturesAvailableStatus,
            0x8001 => CommandCode::GetProjectDataVersion,
            _ => CommandCode::Unknown,
        }
    }

    pub fn as_i64(self) -> i64 {
        self as i64
    }

    /// Canonical display name
    pub fn name(self) -> &'static str {
        match self {
            CommandCode::Unknown => "Unknown",
            CommandCode::TestStart => "TestStart",
            CommandCode::TestStop => "TestStop",
            CommandCode::StartCompute => "StartCompute",
            CommandCode::StopCompute => "StopCompute",
            CommandCode::StartCompare => "StartCompare",
            CommandCode::StopCompare => "StopCompare",
            CommandCode::StartDeploy => "StartDeploy",
            CommandCode::StopDeploy => "StopDeploy",
            CommandCode::StartManufactureDeploy => "StartManufactureDeploy",
            CommandCode::StopManufactureDeploy => "StopManufactureDeploy",
            CommandCode::StartScanTopology => "StartScanTopology",
            CommandCode::StopScanTopology => "StopScanTopology",
            CommandCode::StartSyncDevices => "StartSyncDevices",
            CommandCode::StopSyncDevices => "StopSyncDevices",
            CommandCode::StartDeviceDiscovery => "StartDeviceDiscovery",
            CommandCode::StartRetryConnect => "StartRetryConnect",
            CommandCode::StartLinkSequenceDetect => "StartLinkSequenceDetect",
            CommandCode::StartSetNetworkSetting => "StartSetNetworkSetting",
            CommandCode::StopDeviceDiscovery => "StopDeviceDiscovery",
            CommandCode::StartReboot => "StartReboot",
            CommandCode::StartFactoryDefault => "StartFactoryDefault",
            CommandCode::StartFirmwareUpgrade => "StartFirmwareUpgrade",
            CommandCode::StartEnableSnmp => "StartEnableSnmp",
            CommandCode::StartLocator => "StartLocator",
            CommandCode::StartGetEventLog => "StartGetEventLog",
            CommandCode::StartServicePlatform => "StartServicePlatform",
            CommandCode::StopServicePlatform => "StopServicePlatform",
            CommandCode::StartDeviceConfig => "StartDeviceConfig",
            CommandCode::StopDeviceConfig => "StopDeviceConfig",
            CommandCode::StartDeviceCommandLine => "StartDeviceCommandLine",
            CommandCode::StopDeviceCommandLine => "StopDeviceCommandLine",
            CommandCode::StopReboot => "StopReboot",
            CommandCode::StopFactoryDefault => "StopFactoryDefault",
            CommandCode::StopFirmwareUpgrade => "StopFirmwareUpgrade",
            CommandCode::StopLocator => "StopLocator",
            CommandCode::StartProbeDeviceProfile => "StartProbeDeviceProfile",
            CommandCode::StopProbeDeviceProfile => "StopProbeDeviceProfile",
            CommandCode::StartMonitor => "StartMonitor",
            CommandCode::StopMonitor => "StopMonitor",
            CommandCode::MonitorAliveUpdate => "MonitorAliveUpdate",
            CommandCode::MonitorStatusUpdate => "MonitorStatusUpdate",
            CommandCode::MonitorTrafficUpdate => "MonitorTrafficUpdate",
            CommandCode::MonitorTimeStatusUpdate => "MonitorTimeStatusUpdate",
            CommandCode::MonitorEndpointUpdate => "MonitorEndpointUpdate",
            CommandCode::MonitorSwiftStatusUpdate => "MonitorSwiftStatusUpdate",
            CommandCode::StartTopologyMapping => "StartTopologyMapping",
            CommandCode::StopTopologyMapping => "StopTopologyMapping",
            CommandCode::StartScanMapping => "StartScanMapping",
            CommandCode::StopScanMapping => "StopScanMapping",
            CommandCode::StartIntelligentRequest => "StartIntelligentRequest",
            CommandCode::StopIntelligentRequest => "StopIntelligentRequest",
            CommandCode::StartIntelligentQuestionnaireDownload => "StartIntelligentQuestionnaireDownload",
            CommandCode::StopIntelligentQuestionnaireDownload => "StopIntelligentQuestionnaireDownload",
            CommandCode::StartIntelligentQuestionnaireUpload => "StartIntelligentQuestionnaireUpload",
            CommandCode::StopIntelligentQuestionnaireUpload => "StopIntelligentQuestionnaireUpload",
            CommandCode::StartExportDeviceConfig => "StartExportDeviceConfig",
            CommandCode::StopExportDeviceConfig => "StopExportDeviceConfig",
            CommandCode::StartImportDeviceConfig => "StartImportDeviceConfig",
            CommandCode::StopImportDeviceConfig => "StopImportDeviceConfig",
            CommandCode::PatchUpdate => "PatchUpdate",
            CommandCode::FeaturesAvailableStatus => "FeaturesAvailableStatus",
            CommandCode::GetProjectDataVersion => "GetProjectDataVersion",
        }
    }

    /// The feature block this code belongs to (the high byte)
    pub fn block(self) -> u8 {
        ((self.as_i64() >> 8) & 0xFF) as u8
    }

    /// Whether this is one of the monitor push events (`0x0603..=0x0608`)
    pub fn is_monitor_update(self) -> bool {
        matches!(
            self,
            CommandCode::MonitorAliveUpdate
                | CommandCode::MonitorStatusUpdate
                | CommandCode::MonitorTrafficUpdate
                | CommandCode::MonitorTimeStatusUpdate
                | CommandCode::MonitorEndpointUpdate
                | CommandCode::MonitorSwiftStatusUpdate
        )
    }
}

impl CodeSpace for CommandCode {
    const UNKNOWN: Self = CommandCode::Unknown;
    const SPACE: CodeSpaceKind = CodeSpaceKind::Command;

    fn resolve(raw: i64) -> Self {
        CommandCode::from_i64(raw)
    }

    fn as_i64(self) -> i64 {
        CommandCode::as_i64(self)
    }

    fn name(self) -> &'static str {
        CommandCode::name(self)
    }

    fn all() -> &'static [Self] {
        &CommandCode::ALL
    }
}

impl From<i64> for CommandCode {
    fn from(raw: i64) -> Self {
        CommandCode::from_i64(raw)
    }
}

impl From<CommandCode> for i64 {
    fn from(code: CommandCode) -> Self {
        code.as_i64()
    }
}

/// `{}` prints the name, `{:#}` adds the hex code: `StartMonitor (0x0601)`
impl fmt::Display for CommandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{} (0x{:04X})", self.name(), self.as_i64())
        } else {
            f.write_str(self.name())
        }
    }
}

impl Serialize for CommandCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_code(self, serializer)
    }
}

impl<'de> Deserialize<'de> for CommandCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_code(deserializer)
    }
}
