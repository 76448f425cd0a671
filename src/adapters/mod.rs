// Adapters layer: concrete implementations of the domain ports for external
// systems. Currently only the OpenAlex HTTP catalog.

pub mod openalex;
