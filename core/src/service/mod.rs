pub mod planner_service;
pub mod reconcile;
pub mod stats;

mod planner_service_test;
