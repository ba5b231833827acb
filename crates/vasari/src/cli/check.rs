//! Check command handler.

use vasari_credentials::CredentialResolver;

/// Report where the Gemini API key resolves from.
pub fn handle_check_command() -> anyhow::Result<()> {
    let resolver = CredentialResolver::standard();
    match resolver.resolve() {
        Ok(resolved) => {
            println!("✅ Gemini API key found in {}", resolved.source());
            Ok(())
        }
        Err(_) => {
            println!("❌ Gemini API key not found. Sources checked:");
            for source in resolver.sources() {
                println!("  - {}", source.describe());
            }
            std::process::exit(1);
        }
    }
}
