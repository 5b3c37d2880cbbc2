//! Scaffold files bundled with every export: a `package.json` so the output
//! can be served with one command, and a profession-aware `README.md`.

use serde_json::json;

/// Generates the export `package.json`. The package name is the person's name
/// slugified (lowercased, whitespace runs collapsed to hyphens).
pub fn package_json(name: &str) -> String {
    let manifest = json!({
        "name": format!("{}-portfolio", slugify(name)),
        "version": "1.0.0",
        "description": format!("Portfolio website for {name}"),
        "main": "index.html",
        "scripts": {
            "start": "python -m http.server 8000",
            "serve": "npx serve ."
        },
        "keywords": ["portfolio", "website", "personal"],
        "author": name,
        "license": "MIT"
    });
    // A json! literal with string keys always serializes.
    serde_json::to_string_pretty(&manifest).expect("package manifest serializes")
}

fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Generates the export README. Static structure; the name and profession are
/// interpolated into the prose.
pub fn readme(name: &str, profession: &str) -> String {
    format!(
        r#"# {name}'s Portfolio

A modern, responsive portfolio website showcasing professional experience, projects, and skills in {profession}.

## Features

- AI-generated design tailored for {profession}
- Responsive design that works on all devices
- Modern animations and smooth transitions
- Interactive elements and hover effects
- Profession-specific styling and layout
- Clean, professional presentation
- Easy to customize and maintain

## Getting Started

### Option 1: Simple HTTP Server (Python)
```bash
python -m http.server 8000
```
Then open http://localhost:8000 in your browser.

### Option 2: Using Node.js serve
```bash
npm install -g serve
serve .
```

### Option 3: Live Server (VS Code Extension)
If you're using VS Code, install the "Live Server" extension and right-click on index.html to select "Open with Live Server".

## Customization

- **Colors**: Edit the CSS variables in `styles.css` to change the color scheme
- **Content**: Update the HTML content in `index.html`
- **Fonts**: Change the font family in the CSS file
- **Layout**: Modify the grid layouts and spacing as needed

## File Structure

- `index.html` - Main HTML file with your portfolio content
- `styles.css` - All styling and responsive design
- `script.js` - Interactive features and animations
- `package.json` - Project configuration
- `README.md` - This file

## Browser Support

This portfolio works in all modern browsers including:
- Chrome
- Firefox
- Safari
- Edge

## License

MIT License - feel free to use this template for your own portfolio!
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_json_slugifies_name() {
        let manifest = package_json("Ada Lovelace");
        let parsed: serde_json::Value = serde_json::from_str(&manifest).unwrap();
        assert_eq!(parsed["name"], "ada-lovelace-portfolio");
        assert_eq!(parsed["author"], "Ada Lovelace");
        assert_eq!(parsed["scripts"]["start"], "python -m http.server 8000");
    }

    #[test]
    fn test_slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("Ada   Augusta  Lovelace"), "ada-augusta-lovelace");
        assert_eq!(slugify("single"), "single");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_package_json_escapes_quotes_in_name() {
        // serde_json handles escaping; the output must stay valid JSON.
        let manifest = package_json(r#"Jane "JD" Doe"#);
        let parsed: serde_json::Value = serde_json::from_str(&manifest).unwrap();
        assert_eq!(parsed["author"], r#"Jane "JD" Doe"#);
    }

    #[test]
    fn test_readme_mentions_profession() {
        let text = readme("Ada Lovelace", "Civil Engineer");
        assert!(text.starts_with("# Ada Lovelace's Portfolio"));
        assert!(text.contains("skills in Civil Engineer."));
        assert!(text.contains("AI-generated design tailored for Civil Engineer"));
    }
}
