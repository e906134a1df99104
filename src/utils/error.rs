use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Plan catalog is empty")]
    EmptyCatalogError,

    #[error("Unknown plan: {name}")]
    UnknownPlanError { name: String },

    #[error("Form field '{field}' is invalid: {message}")]
    FormValidationError { field: String, message: String },

    /// Raised by a [`LeadSubmitter`](crate::domain::ports::LeadSubmitter) that could not hand the
    /// lead over; the service passes it through untouched.
    #[error("Submission failed: {message}")]
    SubmissionError { message: String },

    #[error("Output format '{format}' is not available for '{command}'")]
    UnsupportedFormatError { command: String, format: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    UserInput,
    Output,
    Submission,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::IoError(_) => ErrorCategory::Io,
            SiteError::SerializationError(_) | SiteError::CsvError(_) => ErrorCategory::Output,
            SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. }
            | SiteError::EmptyCatalogError => ErrorCategory::Configuration,
            SiteError::UnknownPlanError { .. }
            | SiteError::FormValidationError { .. }
            | SiteError::UnsupportedFormatError { .. } => ErrorCategory::UserInput,
            SiteError::SubmissionError { .. } => ErrorCategory::Submission,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::UserInput => ErrorSeverity::High,
            ErrorCategory::Submission => ErrorSeverity::Medium,
            ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Io | ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SiteError::IoError(_) => "Check that the file exists and is readable",
            SiteError::SerializationError(_) | SiteError::CsvError(_) => {
                "Try another --format or report the problem"
            }
            SiteError::ConfigValidationError { .. } | SiteError::InvalidConfigValueError { .. } => {
                "Fix the site configuration file and try again"
            }
            SiteError::MissingConfigError { .. } => "Add the missing section to the site configuration",
            SiteError::EmptyCatalogError => "Declare at least one [[plans]] entry",
            SiteError::UnknownPlanError { .. } => "Run `mundialnet plans` to see the available plans",
            SiteError::FormValidationError { .. } => "Fill in every required field",
            SiteError::SubmissionError { .. } => "Wait a moment and submit again",
            SiteError::UnsupportedFormatError { .. } => "Use --format text or --format json",
        }
    }

    /// Message shown to the visitor, in the site's language.
    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::FormValidationError { .. } => {
                "Campos obrigatórios: por favor, preencha todos os campos.".to_string()
            }
            SiteError::UnknownPlanError { name } => format!("Plano não encontrado: {}", name),
            SiteError::UnsupportedFormatError { .. } => format!("{}", self),
            SiteError::SubmissionError { .. } => {
                "Não foi possível enviar sua solicitação. Tente novamente.".to_string()
            }
            other => format!("Erro de configuração do site: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
