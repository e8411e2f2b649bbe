pub mod stage1_evaluate;
pub mod stage2_report;
