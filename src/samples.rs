//! Fixed demonstration emails, one per category.

use crate::category::Category;

pub fn sample_for(category: Category) -> &'static str {
    match category {
        Category::Spam => SPAM,
        Category::NotSpam => NOT_SPAM,
        Category::Promotional => PROMOTIONAL,
        Category::Phishing => PHISHING,
        Category::Newsletter => NEWSLETTER,
        Category::Social => SOCIAL,
    }
}

const SPAM: &str = "URGENT! CONGRATULATIONS! You have won $1,000,000 in our international \
lottery! This is not a scam! You must click here immediately and send your bank details to \
claim your prize! ACT NOW! LIMITED TIME! Don't miss this once-in-a-lifetime opportunity!";

const NOT_SPAM: &str = "Dear John,

I hope this email finds you well. I wanted to follow up on our project meeting yesterday \
regarding the quarterly timeline and resource allocation.

Could we schedule a brief call this week to discuss the next steps? I'm available Thursday \
or Friday afternoon.

Please let me know your availability.

Best regards,
Sarah Smith
Project Manager";

const PROMOTIONAL: &str = "🎉 HUGE BLACK FRIDAY SALE! 🎉

Save up to 70% on all electronics this weekend only!
• Laptops starting at $299
• Smartphones 50% off
• Free shipping on orders over $50

Use code: SAVE70
Shop now at TechStore.com - Sale ends Sunday midnight!";

const PHISHING: &str = "SECURITY ALERT: Your account has been temporarily suspended!

We detected unusual login activity on your account. Your account will be permanently closed \
within 24 hours unless you verify your identity immediately.

Click here to verify now and enter your username, password, and banking details to restore \
access.

This is urgent - do not ignore this message!";

const NEWSLETTER: &str = "Tech Weekly Newsletter - January 2025

Dear Subscriber,

Welcome to this week's edition of Tech Weekly. Here's what's happening in technology:

• AI breakthrough in natural language processing
• New Python 3.13 features and improvements
• Cybersecurity trends for 2025
• Upcoming tech conferences

Read full articles at techweekly.com
Unsubscribe anytime at newsletter@techweekly.com";

const SOCIAL: &str = "Facebook Notification

You have new activity on Facebook:

• 3 new friend requests from John, Sarah, and Mike
• 5 people liked your recent photo
• 2 new comments on your weekend trip post
• Your friend Lisa shared an article you might like

View all notifications in the Facebook mobile app or visit facebook.com";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_a_sample() {
        for category in Category::ALL {
            assert!(sample_for(category).len() > 10, "{category}");
        }
    }
}
