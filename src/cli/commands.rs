use chrono::Local;

use crate::app::{AppContext, Result};
use crate::fetcher::loader;
use crate::query;
use crate::tui::app::EmptyState;
use crate::tui::settings::SettingsField;

pub async fn fetch_stories(ctx: &AppContext) -> Result<()> {
    if !ctx.fetcher.is_reachable(&query::endpoint()).await {
        println!("{}", EmptyState::NoConnection.message());
        return Ok(());
    }

    let config = ctx.config()?;
    let url = query::build_search_url(&config, Local::now().date_naive());
    let stories = loader::load_stories(ctx.fetcher.as_ref(), &url).await;

    if stories.is_empty() {
        println!("{}", EmptyState::NoStories.message());
        return Ok(());
    }

    for story in &stories {
        match &story.author {
            Some(author) => println!("{} {} (by {})", story.date_line(), story.headline, author),
            None => println!("{} {}", story.date_line(), story.headline),
        }
        println!("  {}", story.short_url);
    }

    println!("\n{} stories", stories.len());
    Ok(())
}

pub fn show_config(ctx: &AppContext) -> Result<()> {
    let config = ctx.config()?;
    let prefs = &config.search;

    println!("keyword      {}", prefs.keyword);
    if prefs.from_date.is_empty() {
        println!("from-date    (today)");
    } else {
        println!("from-date    {}", prefs.from_date);
    }
    println!("show-images  {}", prefs.show_images);
    println!("show-author  {}", prefs.show_author);
    Ok(())
}

pub fn set_keyword(ctx: &AppContext, value: String) -> Result<()> {
    let mut config = ctx.config()?;
    config.search.keyword = value;
    ctx.save_config(&config)?;

    println!("Search keyword set to {:?}", config.search.keyword);
    Ok(())
}

pub fn set_from_date(ctx: &AppContext, value: String) -> Result<()> {
    let mut config = ctx.config()?;
    config.search.from_date = value;
    ctx.save_config(&config)?;

    if config.search.from_date.is_empty() {
        println!("From-date cleared; today's date will be used");
    } else {
        println!("From-date set to {}", config.search.from_date);
    }
    Ok(())
}

pub fn set_show_images(ctx: &AppContext, enabled: bool) -> Result<()> {
    let mut config = ctx.config()?;
    config.search.show_images = enabled;
    ctx.save_config(&config)?;

    println!("{}", SettingsField::ShowImages.toggle_notice(enabled));
    Ok(())
}

pub fn set_show_author(ctx: &AppContext, enabled: bool) -> Result<()> {
    let mut config = ctx.config()?;
    config.search.show_author = enabled;
    ctx.save_config(&config)?;

    println!("{}", SettingsField::ShowAuthor.toggle_notice(enabled));
    Ok(())
}
