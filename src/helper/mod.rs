pub mod landmark_model;
