fn main() {
    folio_web::start();
}
