pub mod common;
pub mod betweenness;
pub mod closeness;
pub mod clustering;
pub mod components;
pub mod eigenvector;

pub use common::GraphView;
pub use betweenness::betweenness_centrality;
pub use closeness::closeness_centrality;
pub use clustering::{average_clustering, local_clustering};
pub use components::{connected_components, is_connected, ComponentsResult};
pub use eigenvector::{eigenvector_centrality, EigenvectorConfig, EigenvectorResult};
