use clap::{Subcommand, ValueEnum};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the plan catalog
    Plans {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the activities known to the speed calculator
    Activities {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Estimate the speed a household needs and recommend a plan
    Recommend {
        /// Activity ids, comma separated or repeated
        #[arg(short, long = "activity", value_delimiter = ',')]
        activities: Vec<String>,

        /// Connected devices; clamped into the configured range
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        devices: i64,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the plan comparison table
    Compare {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the neighborhoods served in a city
    Coverage {
        #[arg(long)]
        city: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Send a message through the contact form
    Contact {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long, default_value = "")]
        message: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Request a plan through the signup form
    Signup {
        /// Plan name; the featured plan when omitted
        #[arg(long, default_value = "")]
        plan: String,
        #[arg(long)]
        city: Option<String>,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        address: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print WhatsApp, phone, e-mail and social links
    Links {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Frequently asked questions
    Faq {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Mission, vision, values and why customers pick MundialNet
    About {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Plans { .. } => "plans",
            Command::Activities { .. } => "activities",
            Command::Recommend { .. } => "recommend",
            Command::Compare { .. } => "compare",
            Command::Coverage { .. } => "coverage",
            Command::Contact { .. } => "contact",
            Command::Signup { .. } => "signup",
            Command::Links { .. } => "links",
            Command::Faq { .. } => "faq",
            Command::About { .. } => "about",
        }
    }
}
