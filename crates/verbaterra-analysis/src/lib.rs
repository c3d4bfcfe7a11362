//! # verbaterra-analysis
//!
//! The computational core of VerbaTerra: synthetic-data engines, composite
//! metrics, the two-target ICLHF regression model, and the pipeline that
//! chains them.

pub mod engines;
pub mod hypotheses;
pub mod metrics;
pub mod models;
pub mod normalize;
pub mod pipeline;

pub use engines::{run_engine, EngineKind, SimulationOutput};
pub use metrics::{
    compute_crm, compute_metric_means, compute_nlis, CrmConfig, MetricKind, NlisConfig,
};
pub use models::{create_model, IclhfModel, ModelKind};
pub use pipeline::Pipeline;
