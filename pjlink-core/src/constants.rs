//! Protocol constants

/// Default PJLink TCP port
pub const DEFAULT_PORT: u16 = 4352;

/// Default connection timeout (seconds)
pub const DEFAULT_TIMEOUT: u64 = 5;

/// Default read deadline (seconds)
pub const DEFAULT_READ_TIMEOUT: u64 = 5;

/// Class 1 command mnemonics
///
/// The command field is free-form four bytes on the wire; these are the
/// mnemonics class 1 devices answer to.
pub mod commands {
    /// Power on/off/query
    pub const POWER: &str = "POWR";

    /// Input source switch/query
    pub const INPUT: &str = "INPT";

    /// Audio/video mute
    pub const AV_MUTE: &str = "AVMT";

    /// Error status query
    pub const ERROR_STATUS: &str = "ERST";

    /// Lamp hours query
    pub const LAMP: &str = "LAMP";

    /// Available input list query
    pub const INPUT_LIST: &str = "INST";

    /// Projector name query
    pub const NAME: &str = "NAME";

    /// Manufacturer name query
    pub const MANUFACTURER: &str = "INF1";

    /// Product name query
    pub const PRODUCT: &str = "INF2";

    /// Other information query
    pub const INFO: &str = "INFO";

    /// Protocol class query
    pub const CLASS: &str = "CLSS";
}
