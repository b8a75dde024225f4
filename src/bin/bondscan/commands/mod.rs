mod scan;

pub use scan::run_scan as run;
