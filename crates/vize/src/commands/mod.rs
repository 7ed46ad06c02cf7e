pub mod folio;
