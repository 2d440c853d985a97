pub mod statement_testkit;
