use filter_model::filter::FilterError;
use filter_planner::CompileError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input: {0}")]
    InputRead(#[from] std::io::Error),

    #[error("Failed to read the settings file '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse the settings file '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value for {name}: {value}")]
    InvalidEnv { name: String, value: String },

    #[error("Failed to compile filter: {0}")]
    Compile(#[from] CompileError),

    #[error("Invalid field path: {0}")]
    Path(#[from] FilterError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),
}
