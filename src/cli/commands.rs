use crate::app::{AppContext, Result};
use crate::domain::Post;
use crate::format::{display_date, estimate_read_time};

pub async fn list_posts(
    ctx: &AppContext,
    recent: usize,
    featured: bool,
    skip: usize,
    limit: usize,
) -> Result<()> {
    let posts = if featured {
        ctx.source.get_featured_posts(skip, limit).await?
    } else {
        ctx.source.get_recent_posts(recent).await?
    };

    if posts.is_empty() {
        println!("No posts");
        return Ok(());
    }

    for post in &posts {
        println!("{}", post_line(post));
    }
    Ok(())
}

pub async fn show_post(ctx: &AppContext, id: &str) -> Result<()> {
    let post = ctx.source.get_post(id).await?;
    println!("{}", post_detail(&post));
    if let Ok(url) = ctx.source.post_url(&post.id) {
        println!();
        println!("Link: {}", url);
    }
    Ok(())
}

pub async fn count_posts(ctx: &AppContext) -> Result<()> {
    let posts = ctx.source.get_all_posts().await?;
    println!("Total posts available: {}", posts.len());
    Ok(())
}

fn post_line(post: &Post) -> String {
    format!(
        "{:>4}  {:<18}  {}  ({})",
        post.id,
        display_date(&post.created_at),
        post.display_title(),
        estimate_read_time(&post.content)
    )
}

fn post_detail(post: &Post) -> String {
    format!(
        "{}\n{} • {}\n\n{}",
        post.display_title(),
        display_date(&post.created_at),
        estimate_read_time(&post.content),
        post.content
    )
}
