use ihttp_constants::header::{self, HeaderKind, HeaderName};
use ihttp_constants::status::{self, StatusCode};
use ihttp_constants::port;

// Prints the tables, then resolves whatever identifiers or codes are passed as arguments.
//
//     RUST_LOG=debug cargo run --example table -- ContentType 302 x_frame_options
fn main() {
    env_logger::init();

    println!("ports: default={} secure={}", port::default_port(), port::secure_port());

    for code in StatusCode::ALL {
        let rfc = code.rfc().unwrap_or("");
        println!("{code} {:<32} {:<14} {rfc}", code.identifier(), code.category());
    }

    for kind in [HeaderKind::General, HeaderKind::Request, HeaderKind::Response] {
        println!("[{kind}]");
        for name in HeaderName::of_kind(kind) {
            println!("  {:<32} {name}", name.identifier());
        }
    }

    for arg in std::env::args().skip(1) {
        match arg.parse::<u16>() {
            Ok(code) => match StatusCode::from_u16(code) {
                Ok(found) => println!("{arg}: {} ({})", found.identifier(), status::category(code)),
                Err(err) => log::warn!(error:err = err; "{arg}: lookup failed"),
            },
            Err(_) => match header::wire_name_for(&arg) {
                Ok(wire) => println!("{arg}: {wire}"),
                Err(err) => log::warn!(error:err = err; "{arg}: lookup failed"),
            },
        }
    }
}
