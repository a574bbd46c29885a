use anyhow::Result;

pub fn handle_schema() -> Result<()> {
    print!("{}", crate::graphql::sdl());
    Ok(())
}
