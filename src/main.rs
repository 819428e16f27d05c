fn main() {
    product_form_pwa::start();
}
