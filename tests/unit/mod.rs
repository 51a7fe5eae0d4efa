//! Unit tests, one file per source file under `src/`

mod io;
