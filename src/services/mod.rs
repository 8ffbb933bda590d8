pub mod enrichment;
pub mod providers;
pub mod recommendations;
