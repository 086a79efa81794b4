fn main() {
    exporter_web::launch();
}
