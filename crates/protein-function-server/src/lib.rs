//! Protein function prediction server — HTTP access to the GO term classifier.

pub mod config;
pub mod ontology;
pub mod service;
pub mod transport;
pub mod types;

pub use config::{ConfigArgs, ServerConfig};
pub use ontology::OntologyClient;
pub use service::PredictionService;
pub use transport::HttpTransport;
