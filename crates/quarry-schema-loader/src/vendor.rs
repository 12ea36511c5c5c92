mod ingres;
pub use ingres::Ingres;

mod sql_ce;
pub use sql_ce::SqlCe;
