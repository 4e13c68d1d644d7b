pub mod preloader;
