pub mod portraits;
