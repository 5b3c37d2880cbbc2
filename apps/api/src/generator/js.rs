//! JavaScript render pass — a fixed behavior script, identical regardless of
//! resume content or profession: smooth scrolling with navbar offset, scroll
//! visibility toggling, staggered card entrances, a hero typewriter effect,
//! hero parallax, and skill-tag hover scaling.

/// Renders the portfolio behavior script.
pub fn render_js() -> String {
    JS_TEMPLATE.to_string()
}

const JS_TEMPLATE: &str = r##"// Smooth scrolling for navigation links with offset for fixed navbar
document.querySelectorAll('a[href^="#"]').forEach(anchor => {
  anchor.addEventListener('click', function (e) {
    e.preventDefault();
    const targetId = this.getAttribute('href');
    const target = document.querySelector(targetId);

    if (target) {
      const navbarHeight = document.querySelector('.navbar').offsetHeight || 80;
      let targetPosition;

      // The about section is the hero; always scroll to the very top for it
      if (targetId === '#about') {
        targetPosition = 0;
      } else {
        const rect = target.getBoundingClientRect();
        const scrollTop = window.pageYOffset || document.documentElement.scrollTop;
        targetPosition = rect.top + scrollTop - navbarHeight - 20;
      }

      window.scrollTo({
        top: Math.max(0, targetPosition),
        behavior: 'smooth'
      });
    }
  });
});

// Navbar background on scroll
window.addEventListener('scroll', () => {
  const navbar = document.querySelector('.navbar');
  if (window.scrollY > 100) {
    navbar.style.background = 'rgba(15, 23, 42, 0.98)';
    navbar.style.boxShadow = '0 2px 20px rgba(0, 0, 0, 0.3)';
  } else {
    navbar.style.background = 'rgba(15, 23, 42, 0.95)';
    navbar.style.boxShadow = 'none';
  }
});

// Intersection Observer for scroll animations
const observerOptions = {
  threshold: 0.1,
  rootMargin: '0px 0px -50px 0px'
};

const observer = new IntersectionObserver((entries) => {
  entries.forEach(entry => {
    if (entry.isIntersecting) {
      entry.target.classList.add('visible');
    }
  });
}, observerOptions);

// Observe all sections for scroll animations
document.querySelectorAll('.section').forEach(section => {
  observer.observe(section);
});

// Add stagger animation to cards
const animateCards = (selector, delay = 100) => {
  const cards = document.querySelectorAll(selector);
  cards.forEach((card, index) => {
    card.style.animationDelay = `${index * delay}ms`;
    card.style.animation = 'fadeInUp 0.6s ease-out forwards';
  });
};

// Animate cards when they come into view
const cardObserver = new IntersectionObserver((entries) => {
  entries.forEach(entry => {
    if (entry.isIntersecting) {
      if (entry.target.classList.contains('experience-list')) {
        animateCards('.experience-item', 150);
      } else if (entry.target.classList.contains('projects-grid')) {
        animateCards('.project-card', 200);
      } else if (entry.target.classList.contains('skills-grid')) {
        animateCards('.skills-category', 100);
      }
    }
  });
}, observerOptions);

// Observe card containers
document.querySelectorAll('.experience-list, .projects-grid, .skills-grid').forEach(container => {
  cardObserver.observe(container);
});

// Add typing effect to hero title
const heroTitle = document.querySelector('.hero-title');
if (heroTitle) {
  const text = heroTitle.textContent;
  heroTitle.textContent = '';
  heroTitle.style.borderRight = '2px solid';

  let i = 0;
  const typeWriter = () => {
    if (i < text.length) {
      heroTitle.textContent += text.charAt(i);
      i++;
      setTimeout(typeWriter, 100);
    } else {
      heroTitle.style.borderRight = 'none';
    }
  };

  setTimeout(typeWriter, 1000);
}

// Add parallax effect to hero background
window.addEventListener('scroll', () => {
  const scrolled = window.pageYOffset;
  const hero = document.querySelector('.hero');
  if (hero) {
    hero.style.transform = `translateY(${scrolled * 0.5}px)`;
  }
});

// Add smooth hover effects to skill tags
document.querySelectorAll('.skill-tag').forEach(tag => {
  tag.addEventListener('mouseenter', function() {
    this.style.transform = 'scale(1.1) rotate(2deg)';
  });

  tag.addEventListener('mouseleave', function() {
    this.style.transform = 'scale(1) rotate(0deg)';
  });
});
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_is_static() {
        assert_eq!(render_js(), render_js());
    }

    #[test]
    fn test_js_carries_expected_behaviors() {
        let js = render_js();
        assert!(js.contains("IntersectionObserver"));
        assert!(js.contains("typeWriter"));
        assert!(js.contains("scrolled * 0.5"), "parallax factor");
        assert!(js.contains(".skill-tag"));
        assert!(js.contains("navbarHeight"));
    }
}
