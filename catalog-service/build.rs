fn main() -> Result<(), Box<dyn std::error::Error>> {
    tonic_prost_build::configure()
        .compile_protos(&["proto/racing.proto", "proto/sports.proto"], &["proto"])?;

    println!("cargo:rerun-if-changed=proto/racing.proto");
    println!("cargo:rerun-if-changed=proto/sports.proto");
    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}
