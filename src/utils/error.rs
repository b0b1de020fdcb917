use crate::domain::model::InterfaceId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Unknown interface: {name}")]
    UnknownInterface { name: String },

    #[error("Interface {name} conflicts with an existing registration ({iid})")]
    DuplicateInterface { name: String, iid: InterfaceId },

    #[error("Interface {name} derives from unknown interface {base}")]
    UnknownBaseInterface { name: String, base: String },

    #[error("Invalid interface identifier '{value}': {source}")]
    InvalidIdentifier {
        value: String,
        #[source]
        source: uuid::Error,
    },

    #[error("Manifest error: {message}")]
    ManifestError { message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DemoError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::UnknownInterface { name } => {
                format!("No interface named '{}' has been defined", name)
            }
            DemoError::DuplicateInterface { name, .. } => {
                format!("Interface '{}' is defined more than once", name)
            }
            DemoError::UnknownBaseInterface { name, base } => {
                format!("Interface '{}' extends '{}', which is not defined", name, base)
            }
            DemoError::InvalidIdentifier { value, .. } => {
                format!("'{}' is not a valid interface GUID", value)
            }
            DemoError::ManifestError { .. } => "The interface manifest could not be read".to_string(),
            DemoError::InvalidConfigValue { field, .. } => format!("Invalid setting for {}", field),
            DemoError::IoError(_) => "An input/output error occurred".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::UnknownInterface { .. } => {
                "Check the interface name or add it to a manifest with --manifest"
            }
            DemoError::DuplicateInterface { .. } => {
                "Give every interface a unique name and a freshly generated GUID"
            }
            DemoError::UnknownBaseInterface { .. } => {
                "Declare the base interface before the interfaces that extend it"
            }
            DemoError::InvalidIdentifier { .. } => {
                "Use the form XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX"
            }
            DemoError::ManifestError { .. } => "Make sure the manifest is valid TOML",
            DemoError::InvalidConfigValue { .. } => "Run with --help to see accepted values",
            DemoError::IoError(_) => "Check file permissions and that the path exists",
        }
    }

    /// Process exit code for this error. Every failure path maps to 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
