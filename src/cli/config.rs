use crate::error::Result;
use crate::settings::{load_settings, save_settings, settings_path, shellexpand_path};

pub fn run(
    hands_dir: Option<String>,
    cards_dir: Option<String>,
    hero: Option<String>,
    lenient: Option<bool>,
) -> Result<()> {
    let mut settings = load_settings();
    let changed = hands_dir.is_some() || cards_dir.is_some() || hero.is_some() || lenient.is_some();

    if let Some(dir) = hands_dir {
        settings.hands_dir = shellexpand_path(&dir);
    }
    if let Some(dir) = cards_dir {
        settings.cards_dir = shellexpand_path(&dir);
    }
    if let Some(name) = hero {
        settings.hero = name;
    }
    if let Some(flag) = lenient {
        settings.lenient = flag;
    }
    if changed {
        save_settings(&settings)?;
        println!("Saved {}", settings_path().display());
    }

    println!("Hands dir:  {}", settings.hands_dir);
    println!("Cards dir:  {}", settings.cards_dir);
    println!("Hero:       {}", if settings.hero.is_empty() { "(tournament nickname)" } else { &settings.hero });
    println!("Lenient:    {}", settings.lenient);
    Ok(())
}
