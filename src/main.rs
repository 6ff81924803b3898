use somme::Dispatcher;

fn main() {
    Dispatcher::console("somme").dispatch();
}
