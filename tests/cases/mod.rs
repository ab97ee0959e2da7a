pub mod case_001_if_statement;
pub mod case_003_addition;
pub mod case_005_crashing_run;
pub mod case_006_long_loop;
